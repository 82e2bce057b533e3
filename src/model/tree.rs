//! Tree module for constituency tree representation.
//!
//! This module provides [TreeNode], the single concrete node type of a
//! constituency tree, together with pre-order traversal and the query
//! operations built on it (positional lookup, pre-terminal collection,
//! surface-text extraction).

use crate::parser::utils::unescape_label;
use std::fmt;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// One node of a constituency tree: a label plus an ordered list of children.
///
/// There is no tagged node hierarchy. Whether a node is a terminal,
/// a pre-terminal, or an internal constituent is always derived from
/// structure:
/// - **terminal**: no children (a raw token)
/// - **pre-terminal**: exactly one child, and that child is a terminal
///   (typically a part-of-speech tag directly dominating a token)
/// - **internal**: anything else with children (a phrase constituent)
///
/// Each node exclusively owns its children; there are no parent
/// back-references. Children are kept in left-to-right surface order.
///
/// Trees returned by the parser are plain mutable values: post-processing
/// steps (trace removal, root-label stripping) may freely reassign labels
/// and edit child lists through [set_label](Self::set_label),
/// [push_child](Self::push_child), and [children_mut](Self::children_mut).
///
/// # Example
/// ```
/// use penntree::model::TreeNode;
///
/// // Build (NP (DT a) (NN test)) by hand
/// let mut np = TreeNode::new("NP");
/// let mut dt = TreeNode::new("DT");
/// dt.push_child(TreeNode::new("a"));
/// let mut nn = TreeNode::new("NN");
/// nn.push_child(TreeNode::new("test"));
/// np.push_child(dt);
/// np.push_child(nn);
///
/// assert!(np.is_internal());
/// assert_eq!(np.pre_terminals().len(), 2);
/// assert_eq!(np.to_text(), "a test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Constituent type, POS tag, or token text; may be empty
    label: String,

    /// Child nodes in left-to-right surface order
    children: Vec<TreeNode>,
}

// ============================================================================
// New, Getters / Accessors, Mutation (pub)
// ============================================================================
impl TreeNode {
    /// Creates a new node with the given label and no children.
    ///
    /// A node without children is a terminal; it becomes a pre-terminal or
    /// internal node as children are appended.
    pub fn new<S: Into<String>>(label: S) -> Self {
        TreeNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a new node with an unset (empty) label and no children.
    ///
    /// Used by the parser when opening a bracket scope before the label
    /// token has been read.
    pub(crate) fn bare() -> Self {
        TreeNode {
            label: String::new(),
            children: Vec::new(),
        }
    }

    /// Returns the label of this node.
    ///
    /// The label may be empty: degenerate inputs like `( (NP a))` parse fine
    /// and keep the empty label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label of this node.
    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }

    /// Returns the children of this node in left-to-right surface order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Returns a mutable reference to the child list.
    ///
    /// Intended for post-processing steps that splice or drop subtrees.
    pub fn children_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.children
    }

    /// Appends a child as the new rightmost child of this node.
    pub fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Returns `true` if this node is a terminal (has no children).
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node is a pre-terminal: exactly one child,
    /// and that child is a terminal.
    pub fn is_pre_terminal(&self) -> bool {
        self.children.len() == 1 && self.children[0].is_terminal()
    }

    /// Returns `true` if this node has children but is not a pre-terminal.
    pub fn is_internal(&self) -> bool {
        !self.children.is_empty() && !self.is_pre_terminal()
    }

    /// Returns the number of nodes in this tree, counting this node itself,
    /// all terminals, and all constituents.
    pub fn size(&self) -> usize {
        self.pre_order_iter().count()
    }
}

// ============================================================================
// Traversal & Queries (pub)
// ============================================================================
impl TreeNode {
    /// Returns an iterator over the tree in pre-order
    /// (each node before its children, children left to right).
    ///
    /// # Example
    /// ```
    /// use penntree::bracket::parse_str;
    ///
    /// let tree = parse_str("(S (NP a) (VP b))").unwrap();
    /// let labels: Vec<_> = tree.pre_order_iter().map(|n| n.label()).collect();
    /// assert_eq!(labels, ["S", "NP", "a", "VP", "b"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns the node at the given zero-based pre-order position,
    /// counting every node (terminals and constituents alike), with this
    /// node itself at index 0.
    ///
    /// # Arguments
    /// * `index` - Zero-based pre-order position
    ///
    /// # Returns
    /// `Some(&TreeNode)` at that position, or `None` if `index` is at or
    /// beyond the tree size. An out-of-range index is a normal "not found"
    /// result, not an error.
    pub fn select_dfs(&self, index: usize) -> Option<&TreeNode> {
        self.pre_order_iter().nth(index)
    }

    /// Collects every pre-terminal node of this tree in left-to-right
    /// surface order.
    ///
    /// Typically these are the part-of-speech nodes directly dominating the
    /// tokens. The result is eagerly computed and empty for a tree without
    /// pre-terminals (e.g. a bare terminal root).
    pub fn pre_terminals(&self) -> Vec<&TreeNode> {
        self.pre_order_iter().filter(|n| n.is_pre_terminal()).collect()
    }

    /// Flattens the terminal labels of this tree into a surface string.
    ///
    /// Terminals are visited left to right, each label is unescaped
    /// (`-LRB-` → `(`, `-RRB-` → `)`), and the results are joined by single
    /// spaces with no leading or trailing space. Constituent labels
    /// contribute nothing.
    ///
    /// # Example
    /// ```
    /// use penntree::bracket::parse_str;
    ///
    /// let tree =
    ///     parse_str("(ROOT (S (NP (PRP It)) (VP (VBZ is) (NP (DT a) (NN test))) (. .)))")
    ///         .unwrap();
    /// assert_eq!(tree.to_text(), "It is a test .");
    /// ```
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for node in self.pre_order_iter() {
            if !node.is_terminal() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&unescape_label(node.label()));
        }
        text
    }
}

/// Renders the compact single-line bracket form, identical to
/// [to_bracket](crate::bracket::to_bracket) with [BracketStyle::Compact](crate::bracket::BracketStyle::Compact).
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::bracket::writer::to_bracket(self, crate::bracket::BracketStyle::Compact))
    }
}

// =#========================================================================#=
// PRE-ORDER ITERATOR
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack instead of recursion, so arbitrarily deep trees
/// traverse without exhausting the call stack. The traversal is read-only
/// and visits children in their stored order.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> PreOrderIter<'a> {
    fn new(root: &'a TreeNode) -> Self {
        PreOrderIter { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push children in reverse, so the leftmost child is visited first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}
