//! Logic to parse Penn Treebank bracketed-tree text.
//!
//! This module provides [parse_tree] to parse a single tree from a
//! [ByteParser], [parse_all] to parse every tree in a source eagerly, and
//! [TreeIterator] for lazy parsing of large sources.
//!
//! # Algorithm
//! A single left-to-right pass over the tokens `(`, `)`, and text, driven by
//! an explicit stack of open nodes rather than recursion, so arbitrarily deep
//! trees parse without recursion-depth limits:
//! - `(` pushes a new label-less node and clears the `seen_label` flag.
//! - `)` pops the top node and appends it as the rightmost child of the new
//!   top; popping the last open node completes the tree.
//! - A text token becomes the open node's label if none has been seen since
//!   the last `(`; a second text token for the same open node is the
//!   pre-terminal rule: it becomes a brand-new terminal child, appended
//!   directly and never pushed onto the stack. This is how `(TAG token)`
//!   leaves are formed and is deliberately not an error.
//!
//! Malformed input is a deterministic, immediate failure: an unmatched `)`,
//! a dangling open bracket at EOF, and a text token outside any bracket each
//! produce a [ParsingError] carrying the byte position and a snippet of the
//! offending input.

use crate::bracket::defs::TOKEN_DELIMITERS;
use crate::model::TreeNode;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;

// ============================================================================
// API Parsing (pub)
// ============================================================================
/// Parses a single bracketed tree from the given [ByteParser].
///
/// Leading whitespace is skipped. Parsing stops directly after the bracket
/// that closes the tree's root, leaving the parser positioned for the next
/// tree, so multiple trees per source compose (see [parse_all] and
/// [TreeIterator]).
///
/// # Arguments
/// * `bytes` - The byte parser positioned at (or before) the start of a tree
///
/// # Returns
/// * `Ok(TreeNode)` - The root of the parsed tree
/// * `Err(ParsingError)` - If the input is empty, a `)` has no matching `(`,
///   a bracket is left open at EOF, or text appears outside any bracket
pub fn parse_tree<B: ByteSource>(bytes: &mut ByteParser<B>) -> Result<TreeNode, ParsingError> {
    let mut stack: Vec<TreeNode> = Vec::new();
    let mut seen_label = false;

    loop {
        bytes.skip_whitespace();

        match bytes.peek() {
            // EOF before the root closed (or empty input)
            None => return Err(ParsingError::unexpected_eof(bytes)),

            // Open a new bracket scope
            Some(b'(') => {
                bytes.next_byte();
                stack.push(TreeNode::bare());
                seen_label = false;
            }

            // Close the top scope; wire it as rightmost child of its parent
            Some(b')') => {
                let Some(node) = stack.pop() else {
                    return Err(ParsingError::unmatched_close_bracket(bytes));
                };
                bytes.next_byte();
                match stack.last_mut() {
                    Some(parent) => parent.push_child(node),
                    // Popped the node opened by the first '(': tree complete
                    None => return Ok(node),
                }
            }

            // Text token: label of the open node, or a terminal child
            Some(_) => {
                let token = bytes.parse_token(TOKEN_DELIMITERS);
                match stack.last_mut() {
                    None => return Err(ParsingError::token_outside_tree(bytes, token)),
                    Some(top) if !seen_label => {
                        top.set_label(token);
                        seen_label = true;
                    }
                    Some(top) => top.push_child(TreeNode::new(token)),
                }
            }
        }
    }
}

/// Parses all bracketed trees from the byte source until EOF.
///
/// Trees may be separated by any whitespace: one per line, several per line,
/// or spread over multiple lines (pretty-printed treebank files).
///
/// # Arguments
/// * `bytes` - A byte parser over a source containing only bracketed trees
///   and whitespace
///
/// # Returns
/// * `Ok(Vec<TreeNode>)` - All parsed trees
/// * `Err(ParsingError)` - If any tree fails to parse
pub fn parse_all<B: ByteSource>(mut bytes: ByteParser<B>) -> Result<Vec<TreeNode>, ParsingError> {
    let mut trees = Vec::new();
    loop {
        bytes.skip_whitespace();
        if bytes.is_eof() {
            break;
        }
        trees.push(parse_tree(&mut bytes)?);
    }
    Ok(trees)
}

// =#========================================================================#=
// TREE ITERATOR (lazy parser)
// =#========================================================================$=
/// Iterator that parses bracketed trees lazily, one per `next()` call.
///
/// Yields `Result<TreeNode, ParsingError>` for each tree and stops after the
/// first error. Useful for corpus files too large to hold as parsed trees
/// all at once.
///
/// # Example
/// ```
/// use penntree::bracket::TreeIterator;
/// use penntree::parser::byte_parser::ByteParser;
///
/// let bytes = ByteParser::for_str("(S (NP a)) (S (NP b))");
/// let trees: Result<Vec<_>, _> = TreeIterator::new(bytes).collect();
/// assert_eq!(trees.unwrap().len(), 2);
/// ```
pub struct TreeIterator<B: ByteSource> {
    bytes: ByteParser<B>,
    done: bool,
}

impl<B: ByteSource> TreeIterator<B> {
    /// Creates a lazy tree iterator over the given byte parser.
    pub fn new(bytes: ByteParser<B>) -> Self {
        TreeIterator { bytes, done: false }
    }

    /// Consumes the iterator and returns the underlying [ByteParser].
    pub fn into_byte_parser(self) -> ByteParser<B> {
        self.bytes
    }
}

impl<B: ByteSource> Iterator for TreeIterator<B> {
    type Item = Result<TreeNode, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.bytes.skip_whitespace();
        if self.bytes.is_eof() {
            self.done = true;
            return None;
        }

        match parse_tree(&mut self.bytes) {
            Ok(tree) => Some(Ok(tree)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
