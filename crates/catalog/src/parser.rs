//! Parser for catalog files.
//!
//! Format, one movie per line:
//! `title::imdb_rating::rotten_tomatoes_rating::lead_actor::lead_actress`
//!
//! Blank lines and `#` comments are skipped. An empty field or the literal
//! `N/A` means the value is unknown.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogEntry, NOT_AVAILABLE};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

const FIELD_COUNT: usize = 5;

/// Read a catalog file and parse every line.
///
/// Lines are parsed in parallel; the returned entries keep file order.
pub fn parse_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_str(&content, &file_name)
}

/// Parse catalog content that is already in memory
pub fn parse_catalog_str(content: &str, file_name: &str) -> Result<Vec<CatalogEntry>> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    // Collecting into Result stops at an error; rayon keeps indexed order
    lines
        .par_iter()
        .map(|&(line_no, line)| parse_line(line, line_no, file_name))
        .collect()
}

/// Parse a single non-empty line
fn parse_line(line: &str, line_no: usize, file_name: &str) -> Result<CatalogEntry> {
    let parts: Vec<&str> = line.split("::").map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let title = parts[0];
    if title.is_empty() {
        return Err(CatalogError::ParseError {
            file: file_name.to_string(),
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    Ok(CatalogEntry {
        title: title.to_string(),
        imdb_rating: optional_field(parts[1]),
        rotten_tomatoes_rating: optional_field(parts[2]),
        lead_actor: optional_field(parts[3]),
        lead_actress: optional_field(parts[4]),
    })
}

/// Empty and "N/A" both mean unknown
fn optional_field(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.eq_ignore_ascii_case(NOT_AVAILABLE) {
        None
    } else {
        Some(raw.to_string())
    }
}
