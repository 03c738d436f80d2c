//! Core data models for qasm-split
//!
//! These structures describe the result of a split, both as borrowed views
//! for library callers and as the owned report the CLI emits as JSON.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Segments of a split plus the unterminated tail that was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome<'a> {
    /// Delimiter-terminated segments, in order of occurrence
    pub segments: Vec<&'a str>,
    /// Text after the last delimiter (the whole input if none occurred)
    pub remainder: &'a str,
}

impl SplitOutcome<'_> {
    /// True when non-empty text was dropped after the last delimiter
    pub fn is_truncated(&self) -> bool {
        !self.remainder.is_empty()
    }

    /// Convert into an owned report for serialization
    pub fn into_report(self, delimiter: char) -> SplitReport {
        let discarded = self.is_truncated().then(|| self.remainder.to_string());

        SplitReport {
            delimiter: delimiter.to_string(),
            count: self.segments.len(),
            lines: self.segments.into_iter().map(str::to_string).collect(),
            discarded,
        }
    }
}

/// Byte-level counterpart of [`SplitOutcome`], for input of unknown encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSplitOutcome<'a> {
    /// Delimiter-terminated segments, in order of occurrence
    pub segments: Vec<&'a [u8]>,
    /// Bytes after the last delimiter
    pub remainder: &'a [u8],
}

impl ByteSplitOutcome<'_> {
    /// True when non-empty bytes were dropped after the last delimiter
    pub fn is_truncated(&self) -> bool {
        !self.remainder.is_empty()
    }

    /// Convert into an owned report; invalid UTF-8 is replaced with U+FFFD
    pub fn into_report(self, delimiter: char) -> SplitReport {
        let discarded = self
            .is_truncated()
            .then(|| String::from_utf8_lossy(self.remainder).into_owned());

        SplitReport {
            delimiter: delimiter.to_string(),
            count: self.segments.len(),
            lines: self
                .segments
                .into_iter()
                .map(|segment| String::from_utf8_lossy(segment).into_owned())
                .collect(),
            discarded,
        }
    }
}

impl<'a> From<SplitOutcome<'a>> for ByteSplitOutcome<'a> {
    fn from(outcome: SplitOutcome<'a>) -> Self {
        Self {
            segments: outcome.segments.into_iter().map(str::as_bytes).collect(),
            remainder: outcome.remainder.as_bytes(),
        }
    }
}

/// Owned, serializable split result (JSON output format)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitReport {
    /// The delimiter character that was split on
    pub delimiter: String,
    /// Number of segments (equals the number of delimiter occurrences)
    pub count: usize,
    /// The segments, in order
    pub lines: Vec<String>,
    /// Unterminated trailing text that was dropped, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discarded: Option<String>,
}

/// Delimiters that can be given by name on the command line or in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedDelimiter {
    /// Line feed (`\n`)
    Lf,
    /// Carriage return (`\r`)
    Cr,
    Tab,
    Space,
    /// NUL byte
    Nul,
    Semicolon,
    Comma,
    Pipe,
}

impl NamedDelimiter {
    /// The character this name stands for
    pub fn as_char(self) -> char {
        match self {
            NamedDelimiter::Lf => '\n',
            NamedDelimiter::Cr => '\r',
            NamedDelimiter::Tab => '\t',
            NamedDelimiter::Space => ' ',
            NamedDelimiter::Nul => '\0',
            NamedDelimiter::Semicolon => ';',
            NamedDelimiter::Comma => ',',
            NamedDelimiter::Pipe => '|',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_from_truncated_outcome() {
        let outcome = SplitOutcome {
            segments: vec!["a", "b"],
            remainder: "c",
        };
        let report = outcome.into_report('\n');

        assert_eq!(report.delimiter, "\n");
        assert_eq!(report.count, 2);
        assert_eq!(report.lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(report.discarded.as_deref(), Some("c"));
    }

    #[test]
    fn test_report_omits_empty_discarded() {
        let outcome = SplitOutcome {
            segments: vec!["x"],
            remainder: "",
        };
        let report = outcome.into_report(';');
        assert_eq!(report.discarded, None);

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"delimiter":";","count":1,"lines":["x"]}"#);
    }

    #[test]
    fn test_byte_report_replaces_invalid_utf8() {
        let outcome = ByteSplitOutcome {
            segments: vec![&b"caf\xe9"[..]],
            remainder: b"",
        };
        let report = outcome.into_report('\n');
        assert_eq!(report.lines, vec!["caf\u{FFFD}".to_string()]);
        assert_eq!(report.discarded, None);
    }

    #[test]
    fn test_byte_outcome_from_str_outcome() {
        let outcome = SplitOutcome {
            segments: vec!["a", ""],
            remainder: "tail",
        };
        let bytes = ByteSplitOutcome::from(outcome);
        assert_eq!(bytes.segments, vec![&b"a"[..], &b""[..]]);
        assert_eq!(bytes.remainder, b"tail");
        assert!(bytes.is_truncated());
    }

    #[test]
    fn test_named_delimiter_parsing() {
        assert_eq!(NamedDelimiter::from_str("lf").unwrap(), NamedDelimiter::Lf);
        assert_eq!(NamedDelimiter::from_str("Semicolon").unwrap(), NamedDelimiter::Semicolon);
        assert_eq!(NamedDelimiter::from_str("TAB").unwrap().as_char(), '\t');
        assert!(NamedDelimiter::from_str("newline").is_err());
    }

    #[test]
    fn test_named_delimiter_display() {
        assert_eq!(NamedDelimiter::Pipe.to_string(), "pipe");
        assert_eq!(NamedDelimiter::Lf.to_string(), "lf");
    }
}
