//! Penn Treebank bracket format parser and writer for constituency trees.
//!
//! This module converts between bracketed-tree text and [TreeNode]
//! structures, in both directions.
//!
//! # Quick API
//! For simple use cases:
//! * [`parse_str`] - parses the first tree in a string
//! * [`parse_file`] - parses a whole treebank file eagerly
//! * [`to_bracket`] - serializes a tree, compact or pretty
//!
//! # Full API
//! For more control, provide data via a
//! [ByteParser](crate::parser::byte_parser::ByteParser):
//! * [`parser::parse_tree`] - parse a single tree
//! * [`parser::parse_all`] - parse all trees until EOF
//! * [`TreeIterator`] - parse trees lazily
//! * [`write_bracket_file`] - write trees to a file, one per line
//!
//! # Format
//! The bracket notation has the following simple grammar:
//! * `tree ::= '(' label tree* ')' | '(' label terminal ')'`
//! * `label`, `terminal` ::= any run of non-bracket, non-whitespace characters
//!
//! Furthermore:
//! * Any amount of whitespace (including newlines) can separate tokens;
//!   runs of blanks are tolerated, so pretty-printed trees parse unchanged
//! * Labels may contain hyphens and function tags (e.g. `NP-SBJ`)
//! * A literal `(` or `)` inside a token is written `-LRB-` / `-RRB-`
//!   (see [utils](crate::parser::utils))
//! * A label may be empty: `( (NP a))` is accepted and survives round trips
//!
//! Example:
//! ```text
//! (ROOT (S (NP (PRP It)) (VP (VBZ is) (NP (DT a) (NN test))) (. .)))
//! ```

pub(crate) mod defs;
pub mod parser;
pub mod writer;

pub use parser::{TreeIterator, parse_all, parse_tree};
pub use writer::{BracketStyle, to_bracket, write_bracket_file};

use crate::model::TreeNode;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses the first bracketed tree in a string.
///
/// This is a convenience function using default settings; trailing content
/// after the tree's closing bracket is ignored. Use [parse_all] or
/// [TreeIterator] to consume multi-tree input.
///
/// # Arguments
/// * `text` - Bracketed-tree text, e.g. `"(S (NP (DT a) (NN test)))"`
///
/// # Returns
/// * `Ok(TreeNode)` - Root of the parsed tree
/// * `Err(ParsingError)` - If the text is not valid bracket notation
///
/// # Example
/// ```
/// use penntree::bracket::parse_str;
///
/// let tree = parse_str("(S (NP (DT a) (NN test)))").unwrap();
/// assert_eq!(tree.label(), "S");
/// assert_eq!(tree.to_text(), "a test");
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<TreeNode, ParsingError> {
    let mut bytes = ByteParser::for_str(text.as_ref());
    parser::parse_tree(&mut bytes)
}

/// Parses a treebank file eagerly and returns all trees.
///
/// Accepts the usual treebank layouts: one compact tree per line, several
/// trees on a line, or pretty-printed trees spanning multiple lines. The
/// file is streamed through a buffered reader.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * `Ok(Vec<TreeNode>)` - All parsed trees
/// * `Err(ParsingError)` - If reading fails or any tree is malformed
///
/// # Example
/// ```no_run
/// use penntree::bracket::parse_file;
///
/// let trees = parse_file("wsj_0001.mrg")?;
/// println!("Parsed {} trees", trees.len());
/// # Ok::<(), penntree::parser::ParsingError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<TreeNode>, ParsingError> {
    let bytes = ByteParser::from_file_buffered(path)?;
    parser::parse_all(bytes)
}
