//! Delimiter-terminated segment splitting
//!
//! Cuts a text at every occurrence of a single delimiter character and yields
//! the segments that the delimiter *terminates*. Text after the final
//! delimiter is never yielded: a trailing segment without its own terminator
//! is dropped, and an input without any delimiter produces nothing.
//!
//! ```
//! use qasm_split::splitter::split;
//!
//! assert_eq!(split("a\nb\nc", '\n'), vec!["a", "b"]);
//! assert_eq!(split("a\nb\nc\n", '\n'), vec!["a", "b", "c"]);
//! ```
//!
//! This differs from [`str::split`], which always yields the final piece.
//! Use [`split_with_remainder`] when the caller needs to know what was dropped.
//!
//! [`split_bytes`] applies the same rule to raw bytes with a single-byte
//! delimiter, for input that is not valid UTF-8 (Latin-1 comments and the like).

use std::iter::FusedIterator;

use crate::models::{ByteSplitOutcome, SplitOutcome};

/// Delimiter used by [`split_lines`]
pub const DEFAULT_DELIMITER: char = '\n';

/// Lazy iterator over the delimiter-terminated segments of a text
///
/// Created by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    delimiter: char,
    /// Byte offset where the pending segment starts
    cursor: usize,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str, delimiter: char) -> Self {
        Self {
            text,
            delimiter,
            cursor: 0,
        }
    }

    /// Text from the cursor to the end of input
    ///
    /// Once the iterator is exhausted this is exactly the unterminated tail
    /// that was discarded.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.cursor..]
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let pending = &self.text[self.cursor..];
        let offset = pending.find(self.delimiter)?;

        let segment = &pending[..offset];
        self.cursor += offset + self.delimiter.len_utf8();
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every segment consumes at least one byte (its delimiter)
        (0, Some(self.text.len() - self.cursor))
    }
}

impl FusedIterator for Segments<'_> {}

/// Iterate over the segments of `text` terminated by `delimiter`
pub fn segments(text: &str, delimiter: char) -> Segments<'_> {
    Segments::new(text, delimiter)
}

/// Split `text` at each `delimiter`, dropping any unterminated trailing segment
///
/// The result has exactly one element per delimiter occurrence, in order of
/// occurrence. Empty segments (leading or consecutive delimiters) are kept.
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    segments(text, delimiter).collect()
}

/// [`split`] on [`DEFAULT_DELIMITER`]
pub fn split_lines(text: &str) -> Vec<&str> {
    split(text, DEFAULT_DELIMITER)
}

/// Split like [`split`], also returning the discarded trailing segment
pub fn split_with_remainder(text: &str, delimiter: char) -> SplitOutcome<'_> {
    let mut iter = segments(text, delimiter);
    let segments: Vec<&str> = iter.by_ref().collect();

    SplitOutcome {
        segments,
        remainder: iter.remainder(),
    }
}

/// Lazy iterator over the delimiter-terminated segments of a byte slice
///
/// Created by [`byte_segments`].
#[derive(Debug, Clone)]
pub struct ByteSegments<'a> {
    delimiter: u8,
    /// Bytes not yet consumed
    pending: &'a [u8],
}

impl<'a> ByteSegments<'a> {
    /// Bytes from the cursor to the end of input
    ///
    /// Once the iterator is exhausted this is the discarded tail.
    pub fn remainder(&self) -> &'a [u8] {
        self.pending
    }
}

impl<'a> Iterator for ByteSegments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let pos = memchr::memchr(self.delimiter, self.pending)?;
        let (segment, rest) = self.pending.split_at(pos);
        self.pending = &rest[1..];
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.pending.len()))
    }
}

impl FusedIterator for ByteSegments<'_> {}

/// Iterate over the segments of `text` terminated by the byte `delimiter`
pub fn byte_segments(text: &[u8], delimiter: u8) -> ByteSegments<'_> {
    ByteSegments {
        delimiter,
        pending: text,
    }
}

/// Byte-level [`split`]: no encoding is assumed
pub fn split_bytes(text: &[u8], delimiter: u8) -> Vec<&[u8]> {
    byte_segments(text, delimiter).collect()
}

/// Byte-level [`split_with_remainder`]
pub fn split_bytes_with_remainder(text: &[u8], delimiter: u8) -> ByteSplitOutcome<'_> {
    let mut iter = byte_segments(text, delimiter);
    let segments: Vec<&[u8]> = iter.by_ref().collect();

    ByteSplitOutcome {
        segments,
        remainder: iter.remainder(),
    }
}
