//! CSV file loader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DataError, ParseErrorKind};
use crate::model::{CellType, CellValue, Column, Table};

/// Load a comma-separated file into a [`Table`]
///
/// The first line is the header and provides the column names. Each cell is
/// typed by inference; empty fields become [`CellValue::Missing`]. Row and
/// column order match the file. The file handle is closed before returning,
/// on success and on failure alike.
///
/// A record whose field count differs from the header fails the whole load
/// with [`DataError::Parse`], as does a header with duplicate names.
pub fn load_data(filepath: impl AsRef<Path>) -> Result<Table, DataError> {
    let path = filepath.as_ref();
    let file = File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    // Opening a directory succeeds on Linux; the failure must still be an
    // access error, not a parse error from the reader downstream.
    let meta = file.metadata().map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.is_dir() {
        return Err(DataError::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::IsADirectory, "is a directory"),
        });
    }
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = csv_reader
        .headers()
        .map_err(|e| DataError::parse(path, e))?
        .clone();

    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (i, name) in headers.iter().enumerate() {
        if columns.iter().any(|c: &Column| c.name == name) {
            return Err(DataError::parse(
                path,
                ParseErrorKind::DuplicateColumn(name.to_string()),
            ));
        }
        columns.push(Column::new(name.to_string(), i));
    }

    let mut table = Table::new(columns);

    for (record_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| DataError::parse(path, e))?;
        let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();
        table.add_row(cells, record_num + 2); // +2 for 1-indexing and header
    }

    infer_column_types(&mut table);

    Ok(table)
}

/// Parse a string field into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/missing
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Missing;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(trimmed.to_string())
}

/// Widen each column's type tag over its cells
fn infer_column_types(table: &mut Table) {
    for col_idx in 0..table.column_count() {
        let mut inferred = CellType::Missing;

        for row in &table.rows {
            if let Some(cell) = row.cells.get(col_idx) {
                inferred = inferred.widen(cell.cell_type());
            }
        }

        if let Some(col) = table.columns.get_mut(col_idx) {
            col.inferred_type = inferred;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_value() {
        assert_eq!(parse_cell_value(""), CellValue::Missing);
        assert_eq!(parse_cell_value("null"), CellValue::Missing);
        assert_eq!(parse_cell_value("NA"), CellValue::Missing);
        assert_eq!(parse_cell_value("true"), CellValue::Bool(true));
        assert_eq!(parse_cell_value("false"), CellValue::Bool(false));
        assert_eq!(parse_cell_value("42"), CellValue::Int(42));
        assert_eq!(parse_cell_value("3.14"), CellValue::Float(3.14));
        assert_eq!(
            parse_cell_value("2024-01-15"),
            CellValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(
            parse_cell_value("hello"),
            CellValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_infer_column_types_widens() {
        let mut table = Table::new(vec![Column::new("n", 0), Column::new("s", 1)]);
        table.add_row(vec![CellValue::Int(1), CellValue::from("x")], 2);
        table.add_row(vec![CellValue::Float(2.5), CellValue::Missing], 3);
        infer_column_types(&mut table);
        assert_eq!(table.columns[0].inferred_type, CellType::Float);
        assert_eq!(table.columns[1].inferred_type, CellType::String);
    }
}
