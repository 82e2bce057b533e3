//! Utility functions for label escaping and unescaping in bracketed-tree text.
//!
//! Penn Treebank notation uses `(` and `)` as structural characters, so a
//! literal parenthesis inside a token must be written as `-LRB-` or `-RRB-`.
//! Producers of terminal labels apply [escape_label] before the label becomes
//! part of bracketed text; [TreeNode::to_text](crate::model::TreeNode::to_text)
//! reverses the mapping when flattening a tree back to surface text.
//!
//! Only these two replacements are defined; every other character passes
//! through unchanged. The mapping is its own inverse as long as a token does
//! not already contain the literal text `-LRB-` or `-RRB-`.

/// Escapes literal parentheses in a label for use in bracketed-tree text.
///
/// # Arguments
/// * `label` - The label string to escape
///
/// # Returns
/// The label with `(` replaced by `-LRB-` and `)` replaced by `-RRB-`
///
/// # Examples
/// ```
/// # use penntree::parser::utils::escape_label;
/// assert_eq!(escape_label("("), "-LRB-");
/// assert_eq!(escape_label(")"), "-RRB-");
/// assert_eq!(escape_label("test"), "test");
/// assert_eq!(escape_label("NP-SBJ"), "NP-SBJ");
/// assert_eq!(escape_label("a(b)c"), "a-LRB-b-RRB-c");
/// ```
pub fn escape_label(label: &str) -> String {
    if !label.contains('(') && !label.contains(')') {
        return label.to_string();
    }
    label.replace('(', "-LRB-").replace(')', "-RRB-")
}

/// Unescapes bracket placeholders in a label back to literal parentheses.
///
/// # Arguments
/// * `label` - The escaped label string
///
/// # Returns
/// The label with `-LRB-` replaced by `(` and `-RRB-` replaced by `)`
///
/// # Examples
/// ```
/// # use penntree::parser::utils::unescape_label;
/// assert_eq!(unescape_label("-LRB-"), "(");
/// assert_eq!(unescape_label("-RRB-"), ")");
/// assert_eq!(unescape_label("test"), "test");
/// assert_eq!(unescape_label("a-LRB-b-RRB-c"), "a(b)c");
/// ```
pub fn unescape_label(label: &str) -> String {
    if !label.contains("-LRB-") && !label.contains("-RRB-") {
        return label.to_string();
    }
    label.replace("-LRB-", "(").replace("-RRB-", ")")
}
