//! Generic CSV reader with encoding and delimiter auto-detection.
//!
//! Turns CSV text into ordered `column → value` rows using the first line as
//! header. No review-specific logic here.

use csv::{ReaderBuilder, Trim};
use encoding_rs::Encoding;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::RawRow;

/// Candidate delimiters, in tie-break order.
const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// How to read a CSV source. `None` fields are auto-detected.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub delimiter: Option<u8>,
    pub encoding: Option<String>,
    /// Trim whitespace around every header and value.
    pub trim: bool,
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows in file order
    pub rows: Vec<RawRow>,
    /// Column headers
    pub headers: Vec<String>,
    /// Detected or requested encoding label
    pub encoding: String,
    /// Detected or requested delimiter
    pub delimiter: u8,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without BOM) is always reported as `utf-8`; chardet
/// is only consulted for anything else.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    if std::str::from_utf8(body).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    let lower = charset.to_lowercase();
    match lower.as_str() {
        // Not valid UTF-8, so a UTF-8/ASCII guess falls back to windows-1252
        "" | "ascii" | "utf8" => "windows-1252".to_string(),
        s if s.starts_with("utf-8") => "windows-1252".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => lower,
    }
}

/// Decode bytes using an encoding label. A leading BOM is stripped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let codec = Encoding::for_label(encoding.trim().as_bytes()).ok_or_else(|| {
        CsvError::Encoding {
            encoding: encoding.to_string(),
        }
    })?;
    let (text, _, _) = codec.decode(bytes);
    Ok(text.into_owned())
}

/// Pick the candidate delimiter that occurs most often in the header line.
///
/// Ties go to the earlier candidate; a header without any candidate yields `,`.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best = b',';
    let mut best_count = 0;
    for &sep in &DELIMITERS {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best = sep;
        }
    }
    best
}

/// Parse CSV into rows with an explicit delimiter.
///
/// # Example
/// ```ignore
/// use appreviews::parser::csv_to_rows;
///
/// let rows = csv_to_rows("name,age\nAlice,30\nBob,25", b',').unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0]["name"], "Alice");
/// ```
pub fn csv_to_rows(csv: &str, delimiter: u8) -> CsvResult<Vec<RawRow>> {
    if csv.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }
    let (_, rows) = parse_csv(csv.as_bytes(), delimiter, false)?;
    Ok(rows)
}

/// Parse CSV from a reader into headers and rows.
///
/// Short records are padded with empty strings, extra cells are ignored and
/// blank lines are skipped.
pub fn parse_csv<R: Read>(
    reader: R,
    delimiter: u8,
    trim: bool,
) -> CsvResult<(Vec<String>, Vec<RawRow>)> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok((headers, rows))
}

/// Parse CSV bytes, detecting whatever `options` leaves unset.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let (encoding, content) = match options.encoding {
        Some(ref requested) => (requested.clone(), decode_content(bytes, requested)?),
        None => {
            let detected = detect_encoding(bytes);
            match decode_content(bytes, &detected) {
                Ok(content) => (detected, content),
                // chardet knows labels encoding_rs doesn't
                Err(_) => ("windows-1252".to_string(), decode_content(bytes, "windows-1252")?),
            }
        }
    };

    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter = options.delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let (headers, rows) = parse_csv(content.as_bytes(), delimiter, options.trim)?;

    Ok(ParseResult {
        rows,
        headers,
        encoding,
        delimiter,
    })
}

/// Read and parse a CSV file.
///
/// # Example
/// ```ignore
/// let result = parse_file("reviews.csv", &ParseOptions::default())?;
/// println!("Encoding: {}, rows: {}", result.encoding, result.rows.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, options)
}

/// Printable form of a delimiter byte
pub fn format_delimiter(d: u8) -> String {
    match d {
        b'\t' => "\\t".to_string(),
        c => (c as char).to_string(),
    }
}
