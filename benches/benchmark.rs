use criterion::{Criterion, criterion_group, criterion_main};
use penntree::bracket::{BracketStyle, parse_all, parse_str, to_bracket};
use penntree::parser::byte_parser::ByteParser;

const SENTENCE: &str =
    "(ROOT (S (NP (PRP It)) (VP (VBZ is) (NP (DT a) (NN test))) (. .)))";

/// A deeply right-branching tree to exercise the stack machine.
fn deep_tree_text(depth: usize) -> String {
    let mut text = String::new();
    for _ in 0..depth {
        text.push_str("(S (NN x) ");
    }
    text.push_str("(NN x)");
    for _ in 0..depth {
        text.push(')');
    }
    text
}

fn bracket_parsing(c: &mut Criterion) {
    let corpus: String = std::iter::repeat(SENTENCE)
        .take(1000)
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("parse_1k_sentences", |b| {
        b.iter(|| {
            let bytes = ByteParser::for_str(&corpus);
            parse_all(bytes).unwrap()
        });
    });

    let deep = deep_tree_text(500);
    c.bench_function("parse_deep_tree", |b| {
        b.iter(|| parse_str(&deep).unwrap());
    });
}

fn bracket_writing(c: &mut Criterion) {
    let tree = parse_str(SENTENCE).unwrap();

    c.bench_function("to_bracket_compact", |b| {
        b.iter(|| to_bracket(&tree, BracketStyle::Compact));
    });
    c.bench_function("to_bracket_pretty", |b| {
        b.iter(|| to_bracket(&tree, BracketStyle::Pretty));
    });
}

criterion_group!(benches, bracket_parsing, bracket_writing);
criterion_main!(benches);
