//! Bracketed-tree serialization in compact and pretty layouts.

use crate::bracket::defs::{BUFFER_CHARS, NODE_CHARS};
use crate::model::TreeNode;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Layout for serializing a tree to bracketed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStyle {
    /// Single line; siblings separated by exactly one space
    Compact,
    /// Indented multi-line layout: runs of pre-terminal siblings share a
    /// line, every other child starts on its own line indented two spaces
    /// per depth level
    Pretty,
}

/// Returns the bracketed-text representation of a tree.
///
/// Labels are written verbatim: escaping literal parentheses to
/// `-LRB-`/`-RRB-` is the responsibility of whoever produced the labels
/// (see [escape_label](crate::parser::utils::escape_label)), which is what
/// makes compact output a byte-for-byte inverse of parsing on canonical
/// input.
///
/// # Arguments
/// * `tree` - Root of the tree to serialize
/// * `style` - The [BracketStyle] layout to use
///
/// # Example
/// ```
/// use penntree::bracket::{parse_str, to_bracket, BracketStyle};
///
/// let text = "(S (NP (DT a) (NN test)) (VBZ works))";
/// let tree = parse_str(text).unwrap();
/// assert_eq!(to_bracket(&tree, BracketStyle::Compact), text);
/// ```
pub fn to_bracket(tree: &TreeNode, style: BracketStyle) -> String {
    let mut out = String::with_capacity(estimate_bracket_len(tree));
    match style {
        BracketStyle::Compact => build_compact(&mut out, tree),
        BracketStyle::Pretty => build_pretty(&mut out, tree, 0),
    }
    out
}

/// Writes the given trees to a file in compact bracket format, one per line.
///
/// # Arguments
/// * `file` - The file to write to
/// * `trees` - The trees to write
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```no_run
/// use penntree::bracket::{parse_str, write_bracket_file};
/// use std::fs::File;
///
/// let trees = vec![parse_str("(S (NP (PRP It)) (VP (VBZ works)))").unwrap()];
/// let file = File::create("corpus.mrg")?;
/// write_bracket_file(file, &trees)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_bracket_file(file: File, trees: &[TreeNode]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        let bracket = to_bracket(tree, BracketStyle::Compact);
        writer.write_all(bracket.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Compact layout: `(LABEL child child)`, terminals as bare labels.
fn build_compact(out: &mut String, node: &TreeNode) {
    if node.is_terminal() {
        out.push_str(node.label());
        return;
    }

    out.push('(');
    out.push_str(node.label());
    for child in node.children() {
        out.push(' ');
        build_compact(out, child);
    }
    out.push(')');
}

/// Pretty layout. Pre-terminals and terminals always render compact.
///
/// For a constituent node, a child stays on the current line (single-space
/// separated) only while both it and its previous sibling are pre-terminals;
/// any constituent child, and the first child after one, breaks onto a fresh
/// line indented `(level + 1) * 2` spaces. The first child of a node starts
/// on the label's line when it is a pre-terminal.
fn build_pretty(out: &mut String, node: &TreeNode, level: usize) {
    if node.is_terminal() || node.is_pre_terminal() {
        build_compact(out, node);
        return;
    }

    out.push('(');
    out.push_str(node.label());

    let mut prev_grouped = true;
    for child in node.children() {
        let grouped = child.is_pre_terminal();
        if grouped && prev_grouped {
            out.push(' ');
        } else {
            out.push('\n');
            for _ in 0..(level + 1) * 2 {
                out.push(' ');
            }
        }
        build_pretty(out, child, level + 1);
        prev_grouped = grouped;
    }
    out.push(')');
}

/// Estimates the serialized length of a tree: label bytes plus per-node
/// structural overhead. Pretty output runs longer (indentation), but the
/// estimate only seeds the initial capacity.
fn estimate_bracket_len(tree: &TreeNode) -> usize {
    let label_capacity: usize = tree.pre_order_iter().map(|n| n.label().len()).sum();
    let structure_capacity = tree.size() * NODE_CHARS;

    label_capacity + structure_capacity + BUFFER_CHARS
}
