//! Roster CSV reading with encoding and delimiter auto-detection.
//!
//! SIS exports arrive in whatever encoding the district's machine wrote
//! them in, so the parser detects the charset before decoding, then
//! detects the delimiter from the header line. The fixed input column
//! set is checked before any row is deserialized.

use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::models::{RosterRow, INPUT_COLUMNS};

/// Result of parsing with metadata for status output.
#[derive(Debug, Clone)]
pub struct ParsedRoster {
    /// Typed input rows, in file order.
    pub records: Vec<RosterRow>,
    /// Detected or overridden encoding.
    pub encoding: String,
    /// Detected or overridden delimiter.
    pub delimiter: u8,
    /// Header row as read from the file.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the detected encoding.
///
/// Unknown charsets fall back to lossy UTF-8. A UTF-8 BOM is stripped.
pub fn decode_bytes(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => encoding_rs::UTF_8.decode(bytes).0.into_owned(),
    }
}

/// Detect the delimiter by counting candidate separators in the header line.
pub fn detect_delimiter(content: &str) -> u8 {
    let header_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = header_line.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse a roster file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let parsed = parse_roster_file(Path::new("roster.csv"), None)?;
/// println!("{} rows ({}, '{}')", parsed.records.len(), parsed.encoding, parsed.delimiter as char);
/// ```
pub fn parse_roster_file(path: &Path, delimiter: Option<u8>) -> ParseResult<ParsedRoster> {
    let bytes = std::fs::read(path)?;
    parse_roster_bytes(&bytes, delimiter)
}

/// Parse roster bytes. Pass `delimiter` to skip auto-detection.
pub fn parse_roster_bytes(bytes: &[u8], delimiter: Option<u8>) -> ParseResult<ParsedRoster> {
    let encoding = detect_encoding(bytes);
    let content = decode_bytes(bytes, &encoding);

    if content.trim().is_empty() {
        return Err(ParseError::EmptyFile);
    }

    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    check_schema(&headers)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    Ok(ParsedRoster {
        records,
        encoding,
        delimiter,
        headers,
    })
}

/// Reject the run before processing any record if an expected column is
/// missing. Extra columns are tolerated and ignored.
fn check_schema(headers: &[String]) -> ParseResult<()> {
    for expected in INPUT_COLUMNS {
        if !headers.iter().any(|h| h == expected) {
            return Err(ParseError::Schema {
                column: expected.to_string(),
            });
        }
    }
    Ok(())
}
