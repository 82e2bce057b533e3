//! Buffered reader implementation of byte source for the parser.
//!
//! This module provides [BufferedByteSource], which wraps a file in a [BufReader]
//! for efficient streaming I/O. Use this for large treebank files where loading
//! everything into memory would be impractical.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::parser::byte_source::ByteSource;

// =#========================================================================#=
// BUFFERED BYTE SOURCE
// =#========================================================================$=
/// A buffered byte source for streaming large files.
///
/// Uses [BufReader] for efficient disk I/O. Bracketed-tree parsing only ever
/// needs single-byte lookahead, so no separate peek buffer is maintained;
/// error context is served straight from the reader's internal buffer.
pub struct BufferedByteSource {
    /// Underlying reader of file, handles getting chunks from file
    reader: BufReader<File>,

    /// Current absolute position in the stream
    pos: usize,
}

impl BufferedByteSource {
    /// Creates a new buffered byte source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<BufferedByteSource> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(Self { reader, pos: 0 })
    }
}

impl ByteSource for BufferedByteSource {
    fn peek(&mut self) -> Option<u8> {
        let buf = self.reader.fill_buf().ok()?;
        buf.first().copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.reader.consume(1);
        self.pos += 1;
        Some(byte)
    }

    fn get_context(&mut self, k: usize) -> Vec<u8> {
        // Context may be shorter than k if it crosses a buffer boundary;
        // that is fine for error reporting.
        match self.reader.fill_buf() {
            Ok(buf) => buf[..k.min(buf.len())].to_vec(),
            Err(_) => Vec::new(),
        }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn is_eof(&mut self) -> bool {
        match self.reader.fill_buf() {
            Ok(buf) => buf.is_empty(),
            Err(_) => true,
        }
    }
}
