// ==========================================
// Lastmanagement Dashboard - File Parsers
// ==========================================
// Reads the source workbook into a raw rectangular
// table of strings. Supports Excel (.xlsx/.xls) and
// CSV (.csv); the format is picked by extension.
// ==========================================
// Typing (dates, numerics) happens later in the record
// builder; this stage only trims and drops blank rows.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - headers + string rows
// ==========================================

/// The untyped result of reading a source file: header names in
/// column order plus one `Vec<String>` per non-blank data row,
/// aligned to the headers.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Column index of a named header, exact match after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text at (row, column); empty cells come back as `None`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        let value = self.rows.get(row)?.get(column)?.as_str();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

// ==========================================
// CSV parsing
// ==========================================

pub fn parse_csv(path: &Path) -> ImportResult<RawTable> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // tolerate ragged rows
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = (0..headers.len())
            .map(|i| record.get(i).unwrap_or("").trim().to_string())
            .collect();

        // skip fully blank rows
        if row.iter().all(|v| v.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

// ==========================================
// Excel parsing
// ==========================================

pub fn parse_excel(path: &Path) -> ImportResult<RawTable> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

    // first sheet only, like the source dashboard
    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| ImportError::EmptySheet(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

    let mut cells = range.rows();
    let header_row = cells
        .next()
        .ok_or_else(|| ImportError::EmptySheet(path.display().to_string()))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for data_row in cells {
        let row: Vec<String> = (0..headers.len())
            .map(|i| {
                data_row
                    .get(i)
                    .map(|cell| cell.to_string().trim().to_string())
                    .unwrap_or_default()
            })
            .collect();

        if row.iter().all(|v| v.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

// ==========================================
// Extension dispatch
// ==========================================

/// Parse a source file, choosing the parser by extension.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ImportResult<RawTable> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => parse_csv(path),
        "xlsx" | "xls" => parse_excel(path),
        _ => Err(ImportError::UnsupportedFormat(ext)),
    }
}
