//! qasm-split: delimiter-terminated text splitting
//!
//! Splits a text into the segments terminated by a single delimiter
//! character, typically the lines of an OpenQASM source file. Text after the
//! last delimiter has no terminator and is dropped; use
//! [`split_with_remainder`] to see what was dropped.
//!
//! # Example Usage
//!
//! ```
//! use qasm_split::{split, split_lines};
//!
//! assert_eq!(split_lines("qreg q[2];\nh q[0];\n"), vec!["qreg q[2];", "h q[0];"]);
//! assert_eq!(split("a;b;c", ';'), vec!["a", "b"]);
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod sample;
pub mod splitter;

// Re-export commonly used types
pub use config::{parse_delimiter, SplitConfig};
pub use models::{ByteSplitOutcome, NamedDelimiter, SplitOutcome, SplitReport};
pub use splitter::{
    byte_segments, segments, split, split_bytes, split_bytes_with_remainder, split_lines,
    split_with_remainder, ByteSegments, Segments, DEFAULT_DELIMITER,
};
