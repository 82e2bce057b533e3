//! Shared definitions for the bracket format modules.

/// Bytes that terminate a text token: the structural brackets and whitespace.
///
/// The grammar is whitespace-insensitive between tokens, so runs of blanks,
/// tabs, and newlines are all tolerated.
pub(crate) const TOKEN_DELIMITERS: &[u8] = b"() \t\n\r";

/// Per-node structural overhead in serialized form: `(`, separator, `)`.
pub(crate) const NODE_CHARS: usize = 3;

/// Extra slack in bracket string capacity estimates.
pub(crate) const BUFFER_CHARS: usize = 10;
