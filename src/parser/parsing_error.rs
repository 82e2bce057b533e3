use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing bracketed trees
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// A `)` was read with no bracket left open
    UnmatchedCloseBracket,
    /// Input ended while brackets were still open (or input was empty)
    UnexpectedEof,
    /// A text token appeared outside any bracketed group
    TokenOutsideTree(String),
    /// Underlying I/O failure while reading the source
    IoError(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and surrounding bytes)
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &mut ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnmatchedCloseBracket
    pub fn unmatched_close_bracket<S: ByteSource>(parser: &mut ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnmatchedCloseBracket, parser)
    }

    /// Convenience constructor for UnexpectedEof
    pub fn unexpected_eof<S: ByteSource>(parser: &mut ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEof, parser)
    }

    /// Convenience constructor for TokenOutsideTree
    pub fn token_outside_tree<S: ByteSource>(parser: &mut ByteParser<S>, token: String) -> Self {
        Self::from_parser(ParsingErrorType::TokenOutsideTree(token), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::UnmatchedCloseBracket => {
                write!(f, "Unmatched ')' - no bracket left open")?
            }
            ParsingErrorType::UnexpectedEof => {
                write!(f, "Unexpected end of input - bracket not closed")?
            }
            ParsingErrorType::TokenOutsideTree(token) => {
                write!(f, "Token {:?} outside any bracketed tree", token)?
            }
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(
                f,
                "\n  Context (next {} bytes): {}",
                self.context.len(),
                self.context
            )?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            position: 0,
            context: String::new(),
        }
    }
}
