use crate::{error::ParseError, interpreter::blocks::Marker};

pub type ParseResult<T> = Result<T, ParseError>;

/// Classifies a line as a block marker.
///
/// Only the first whitespace-separated word counts, so `START_IF x > 1` opens
/// an `IF` block while `PRINT START_IF` is not a marker at all.
///
/// # Example
/// ```
/// use blockscript::interpreter::{blocks::Marker, parser::block_marker};
///
/// assert_eq!(block_marker("  START_WHILE n > 0"), Some(Marker::Open("WHILE")));
/// assert_eq!(block_marker("END_FOR"), Some(Marker::Close("FOR")));
/// assert_eq!(block_marker("ASSIGN x = 1"), None);
/// ```
#[must_use]
pub fn block_marker(line: &str) -> Option<Marker<'_>> {
    let keyword = line.split_whitespace().next()?;

    keyword.strip_prefix("START_")
           .map(Marker::Open)
           .or_else(|| keyword.strip_prefix("END_").map(Marker::Close))
}

/// The parts of a `START_FOR <var> FROM <start> TO <end> BY <step>` header.
///
/// Bounds are kept as written; each one is either a variable name or an
/// integer literal and is resolved when the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForHeader<'a> {
    /// The loop variable.
    pub var:   &'a str,
    /// First value of the loop variable.
    pub start: &'a str,
    /// Inclusive bound.
    pub end:   &'a str,
    /// Increment added after every iteration; may be negative.
    pub step:  &'a str,
}

/// Splits a `FOR` header, without its keyword, into its parts.
///
/// # Returns
/// `None` unless the header has exactly seven words with `FROM`, `TO` and
/// `BY` in their places.
///
/// # Example
/// ```
/// use blockscript::interpreter::parser::{ForHeader, parse_for_header};
///
/// assert_eq!(parse_for_header("i FROM 1 TO max BY 2"),
///            Some(ForHeader { var:   "i",
///                             start: "1",
///                             end:   "max",
///                             step:  "2", }));
/// assert_eq!(parse_for_header("i FROM 1 TO 5"), None);
/// ```
#[must_use]
pub fn parse_for_header(header: &str) -> Option<ForHeader<'_>> {
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts[..] {
        [var, "FROM", start, "TO", end, "BY", step] => Some(ForHeader { var,
                                                                        start,
                                                                        end,
                                                                        step }),
        _ => None,
    }
}
