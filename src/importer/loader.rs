//! Tabular loader: turns an uploaded CSV / XLSX / XLS file into rows
//!
//! Headers are normalized once here (trim, lowercase, spaces to `_`,
//! parentheses stripped) so that column lookups only ever compare
//! normalized keys.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Xls, Xlsx};
use chrono::NaiveDateTime;
use indexmap::IndexMap;

use super::error::LoadError;

/// Cell text that pandas-style readers treat as a missing value
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-NaN", "-nan", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// A raw cell value, typed as far as the source format allows
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Build a text cell, folding blanks and NA markers into `Empty`
    pub fn text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Trimmed textual form; `None` when the cell is missing
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Int(v) => Some(v.to_string()),
            CellValue::Float(v) if v.is_nan() => None,
            // Spreadsheets store integral numbers as floats
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                Some((*v as i64).to_string())
            }
            CellValue::Float(v) => Some(v.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::DateTime(dt) => {
                if dt.time() == chrono::NaiveTime::MIN {
                    Some(dt.date().format("%Y-%m-%d").to_string())
                } else {
                    Some(dt.format("%Y-%m-%d %H:%M:%S").to_string())
                }
            }
        }
    }
}

/// One data row keyed by normalized header, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: usize,
    cells: IndexMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize, cells: IndexMap<String, CellValue>) -> Self {
        Self { index, cells }
    }

    /// 0-based position among the loaded rows
    pub fn index(&self) -> usize {
        self.index
    }

    /// Row number as shown to users: 1-based, header counted as row 1
    pub fn number(&self) -> usize {
        self.index + 2
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// `"PC Name (COMP ID)"` becomes `"pc_name_comp_id"`
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace(|c: char| c == '(' || c == ')', "")
}

/// Load every data row of `content`, choosing the parser from the
/// (case-insensitive) extension of `file_name`.
pub fn load_rows(file_name: &str, content: &[u8]) -> Result<Vec<Row>, LoadError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let rows = match extension.as_deref() {
        Some("csv") => load_csv(content)?,
        Some("xlsx") => {
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(content))
                .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;
            load_first_sheet(workbook)?
        }
        Some("xls") => {
            let workbook: Xls<_> = Xls::new(Cursor::new(content))
                .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;
            load_first_sheet(workbook)?
        }
        _ => return Err(LoadError::UnsupportedFormat(file_name.to_string())),
    };

    tracing::debug!("Loaded {} rows from {}", rows.len(), file_name);
    Ok(rows)
}

fn load_csv(content: &[u8]) -> Result<Vec<Row>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(LoadError::MissingHeader);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record.iter().map(CellValue::text).collect()),
            // Malformed lines are dropped, not fatal
            Err(err) if matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }) => {
                tracing::debug!("Skipping malformed CSV record: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(assemble_rows(&headers, records))
}

fn load_first_sheet<RS, R>(mut workbook: R) -> Result<Vec<Row>, LoadError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)?
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header_row = sheet_rows.next().ok_or(LoadError::MissingHeader)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(LoadError::MissingHeader);
    }

    let records = sheet_rows
        .map(|cells| cells.iter().map(cell_value).collect())
        .collect();

    Ok(assemble_rows(&headers, records))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) if v.is_nan() => CellValue::Empty,
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Empty),
    }
}

/// Zip records against headers. Unnamed columns are ignored, the first of
/// duplicated headers wins, and rows with no value at all are dropped.
fn assemble_rows(headers: &[String], records: Vec<Vec<CellValue>>) -> Vec<Row> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let mut cells = IndexMap::new();
        for (header, cell) in headers.iter().zip(record) {
            if header.is_empty() {
                continue;
            }
            cells.entry(header.clone()).or_insert(cell);
        }
        if cells.values().all(CellValue::is_missing) {
            continue;
        }
        rows.push(Row::new(rows.len(), cells));
    }
    rows
}
