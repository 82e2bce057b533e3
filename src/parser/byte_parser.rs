//! Low-level byte-by-byte parser for bracketed-tree text.
//!
//! This module provides [ByteParser] for scanning bracketed-tree notation with
//! support for peeking, consuming, whitespace skipping, and token scanning.
//! Used as the foundation for the Penn Treebank bracket parser.

use crate::parser::buffered_byte_source::BufferedByteSource;
use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for bracketed-tree text.
///
/// [ByteParser] provides the scanning operations the bracket parser needs:
/// single-byte lookahead, conditional consumption, whitespace skipping, and
/// scanning a token up to a delimiter set. It operates on any [ByteSource],
/// so the same parse logic works on in-memory strings and streamed files.
///
/// # Example
/// ```
/// use penntree::parser::byte_parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  (S (NP a))");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_token(b"() \t\n\r"), "S");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a byte slice by copying it into a Vec.
    ///
    /// # Arguments
    /// * `input` - The byte slice to parse
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new `ByteParser` from a string slice by copying it into a Vec.
    ///
    /// # Arguments
    /// * `input` - The string to parse
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` that loads an entire file into memory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file_in_memory<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl ByteParser<BufferedByteSource> {
    /// Creates a new `ByteParser` that streams a file through a buffered reader.
    ///
    /// Preferred for large treebank files.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file_buffered<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(BufferedByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    ///
    /// # Arguments
    /// * `source` - The byte source to parse
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&mut self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Consumes the current byte if it matches the target byte exactly.
    ///
    /// # Arguments
    /// * `ch` - The byte to match and consume
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Scans a token: consumes bytes until any of the given delimiters
    /// (or EOF) is encountered, without consuming the delimiter.
    ///
    /// # Arguments
    /// * `delimiters` - Byte array of characters that terminate the token
    ///
    /// # Returns
    /// The scanned token as a string (lossy for non-UTF-8 input)
    pub fn parse_token(&mut self, delimiters: &[u8]) -> String {
        let mut token = Vec::new();

        while let Some(b) = self.peek() {
            // Stop at any delimiter
            if delimiters.contains(&b) {
                break;
            }
            token.push(b);
            self.next_byte();
        }

        String::from_utf8_lossy(&token).into_owned()
    }

    /// Returns whether the end of data (EOF) has been reached.
    ///
    /// # Returns
    /// `true` if at or beyond the end of data, `false` otherwise
    pub fn is_eof(&mut self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position in the input.
    ///
    /// Useful for error messages and tracking parser state.
    ///
    /// # Returns
    /// The current byte offset in the input
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns up to `k` bytes from the current position for error context.
    ///
    /// # Arguments
    /// * `k` - Maximum number of bytes to retrieve
    ///
    /// # Returns
    /// A vector containing up to `k` bytes (or fewer if EOF reached)
    pub fn get_context(&mut self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    ///
    /// # Arguments
    /// * `k` - Maximum number of bytes to retrieve
    ///
    /// # Returns
    /// A string containing up to `k` bytes (or fewer if EOF reached)
    pub fn get_context_as_string(&mut self, k: usize) -> String {
        let context_bytes = self.get_context(k);
        String::from_utf8_lossy(&context_bytes).into_owned()
    }
}
