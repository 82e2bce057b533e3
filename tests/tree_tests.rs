use penntree::bracket::parse_str;
use penntree::model::TreeNode;

const EXAMPLE: &str =
    "(ROOT (S (NP (PRP It)) (VP (VBZ is) (NP (DT a) (NN test))) (. .)))";

// --- TESTS NODE PREDICATES ---
#[test]
fn test_terminal_pre_terminal_internal() {
    let tree = parse_str("(S (NP (DT a) (NN test)) (VBZ works))").unwrap();

    assert!(tree.is_internal());
    assert!(!tree.is_terminal());
    assert!(!tree.is_pre_terminal());

    let np = &tree.children()[0];
    assert!(np.is_internal());

    let dt = &np.children()[0];
    assert!(dt.is_pre_terminal());
    assert!(!dt.is_internal());

    let token = &dt.children()[0];
    assert!(token.is_terminal());
    assert_eq!(token.label(), "a");

    let vbz = &tree.children()[1];
    assert!(vbz.is_pre_terminal());
}

#[test]
fn test_bare_terminal_root() {
    let node = TreeNode::new("token");

    assert!(node.is_terminal());
    assert!(!node.is_pre_terminal());
    assert!(!node.is_internal());
    assert_eq!(node.size(), 1);
    assert!(node.pre_terminals().is_empty());
    assert_eq!(node.to_text(), "token");
}

// --- TESTS DFS INDEXING ---
#[test]
fn test_select_dfs_numbering() {
    let tree = parse_str(EXAMPLE).unwrap();

    // 15 nodes: every constituent, POS node, and token counted once
    assert_eq!(tree.size(), 15);

    // Root is always index 0
    assert_eq!(tree.select_dfs(0).unwrap().label(), "ROOT");

    // Node before children, children left to right
    assert_eq!(tree.select_dfs(1).unwrap().label(), "S");
    assert_eq!(tree.select_dfs(2).unwrap().label(), "NP");
    assert_eq!(tree.select_dfs(3).unwrap().label(), "PRP");
    assert_eq!(tree.select_dfs(4).unwrap().label(), "It");
    assert_eq!(tree.select_dfs(5).unwrap().label(), "VP");

    // Last node in pre-order is the final token
    let last = tree.select_dfs(14).unwrap();
    assert!(last.is_terminal());
    assert_eq!(last.label(), ".");

    // Out of range is a normal "not found", not an error
    assert!(tree.select_dfs(15).is_none());
    assert!(tree.select_dfs(1000).is_none());
}

#[test]
fn test_pre_order_iter_order() {
    let tree = parse_str("(S (NP a) (VP b))").unwrap();
    let labels: Vec<_> = tree.pre_order_iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["S", "NP", "a", "VP", "b"]);
}

// --- TESTS PRE-TERMINAL COLLECTION ---
#[test]
fn test_pre_terminals_order_and_tokens() {
    let tree = parse_str(EXAMPLE).unwrap();
    let pre_terminals = tree.pre_terminals();

    let tags: Vec<_> = pre_terminals.iter().map(|n| n.label()).collect();
    assert_eq!(tags, ["PRP", "VBZ", "DT", "NN", "."]);

    // Each pre-terminal's single child carries the surface token
    let tokens: Vec<_> = pre_terminals
        .iter()
        .map(|n| n.children()[0].label())
        .collect();
    assert_eq!(tokens, ["It", "is", "a", "test", "."]);

    // Safe to iterate again: eagerly computed
    assert_eq!(tree.pre_terminals().len(), 5);
}

// --- TESTS TEXT EXTRACTION ---
#[test]
fn test_to_text_ignores_constituent_labels() {
    let tree = parse_str(EXAMPLE).unwrap();
    // Single spaces, no trailing space, no newline
    assert_eq!(tree.to_text(), "It is a test .");
}

#[test]
fn test_to_text_unescapes_brackets() {
    let tree =
        parse_str("(FRAG (-LRB- -LRB-) (NN aside) (-RRB- -RRB-))").unwrap();
    assert_eq!(tree.to_text(), "( aside )");
}

#[test]
fn test_to_text_single_pre_terminal() {
    let tree = parse_str("(NN dog)").unwrap();
    assert_eq!(tree.to_text(), "dog");
}

// --- TESTS MUTATION (post-processing style) ---
#[test]
fn test_trace_removal_mutation() {
    let mut tree =
        parse_str("(S (NP-SBJ (-NONE- *T*)) (VP (VBZ is) (ADJP (JJ fine))))").unwrap();

    // Drop all subtrees whose only content is a trace
    tree.children_mut()
        .retain(|child| !child.pre_order_iter().any(|n| n.label() == "-NONE-"));

    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.to_text(), "is fine");
}

#[test]
fn test_root_label_stripping_mutation() {
    let mut tree = parse_str("(ROOT (S (NP a)))").unwrap();
    tree.set_label("");

    assert_eq!(tree.label(), "");
    assert_eq!(tree.to_string(), "( (S (NP a)))");
}

#[test]
fn test_display_is_compact_bracket_form() {
    let tree = parse_str(EXAMPLE).unwrap();
    assert_eq!(tree.to_string(), EXAMPLE);
}
