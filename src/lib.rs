//! Penntree is a library to parse, serialize, and query constituency trees
//! in Penn Treebank bracketed notation.
//!
//! Core functionality provided:
//! - Bracket parser: an explicit stack machine converts bracketed text like
//!   `(S (NP (DT a) (NN test)))` into a [TreeNode] tree; malformed input
//!   (unbalanced brackets, stray tokens) fails with a positioned
//!   [ParsingError] instead of a partial tree.
//! - Bracket writer: compact single-line output that round-trips
//!   byte-for-byte on canonical input, and an indented pretty layout that
//!   keeps runs of part-of-speech leaves on one line.
//! - Tree model: [TreeNode] is a single concrete record type (label +
//!   ordered children); terminal, pre-terminal, and internal are computed
//!   predicates, not variants, and the tree stays freely mutable for
//!   post-processing.
//! - Queries: pre-order traversal, positional lookup
//!   ([select_dfs](model::TreeNode::select_dfs)), pre-terminal collection,
//!   and surface-text extraction with `-LRB-`/`-RRB-` unescaping
//!   ([to_text](model::TreeNode::to_text)).
//!
//! Every operation is synchronous and touches no shared state: parsing and
//! querying different trees from different threads needs no coordination,
//! while mutating a single tree requires `&mut` access as usual.
//!
//! # Usage patterns
//! 1. Several methods provide quick access with default settings, see
//!    [crate::bracket].
//! 2. For large corpora, feed a
//!    [ByteParser](crate::parser::byte_parser::ByteParser) over a buffered
//!    file source to [bracket::parse_all] or [bracket::TreeIterator].
//!
//! # Example
//!
//! Parse a single bracketed tree and query it:
//! ```
//! use penntree::parse_bracket_str;
//!
//! let tree =
//!     parse_bracket_str("(ROOT (S (NP (PRP It)) (VP (VBZ is) (NP (DT a) (NN test))) (. .)))")
//!         .unwrap();
//! assert_eq!(tree.to_text(), "It is a test .");
//! assert_eq!(tree.pre_terminals().len(), 5);
//! assert_eq!(tree.select_dfs(0).unwrap().label(), "ROOT");
//! ```
//!
//! Parse a treebank file:
//! ```no_run
//! use penntree::parse_bracket_file;
//!
//! let trees = parse_bracket_file("wsj_0001.mrg")?;
//! println!("Loaded {} trees", trees.len());
//! # Ok::<(), penntree::parser::ParsingError>(())
//! ```

pub mod bracket;
pub mod model;
pub mod parser;

pub use crate::bracket::{BracketStyle, to_bracket};
pub use crate::model::TreeNode;
pub use crate::parser::parsing_error::ParsingError;

use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses the first bracketed tree in a string, returning its root [TreeNode].
///
/// See [`bracket::parse_str`] for full documentation of this convenience function.
pub fn parse_bracket_str<S: AsRef<str>>(text: S) -> Result<TreeNode, ParsingError> {
    bracket::parse_str(text)
}

/// Parses a treebank file using default settings,
/// returning a vector of [TreeNode] roots.
///
/// See [`bracket::parse_file`] for full documentation of this convenience function.
pub fn parse_bracket_file<P: AsRef<Path>>(path: P) -> Result<Vec<TreeNode>, ParsingError> {
    bracket::parse_file(path)
}
