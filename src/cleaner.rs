//! Row filtering over a loaded table

use crate::model::Table;

/// Return a new table with every row containing a missing value removed
///
/// A row is retained if and only if none of its cells is
/// [`Missing`](crate::CellValue::Missing). Retained rows keep their relative
/// order; the column set, order, and inferred types are carried over
/// unchanged. The input table is not modified.
///
/// Total over any well-formed table: a zero-row input, an input with no
/// missing values, and an input where every row has a hole all produce the
/// expected copy without error.
pub fn clean_data(table: &Table) -> Table {
    let mut cleaned = Table::new(table.columns.clone());
    for row in &table.rows {
        if !row.has_missing() {
            cleaned.add_row(row.cells.clone(), row.source_line);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellType, CellValue, Column};

    fn table_with_holes() -> Table {
        let mut table = Table::new(vec![
            Column::with_type("a", 0, CellType::Int),
            Column::with_type("b", 1, CellType::Int),
        ]);
        table.add_row(vec![CellValue::Int(1), CellValue::Int(2)], 2);
        table.add_row(vec![CellValue::Missing, CellValue::Int(4)], 3);
        table.add_row(vec![CellValue::Int(5), CellValue::Int(6)], 4);
        table
    }

    #[test]
    fn test_drops_rows_with_missing_cells() {
        let table = table_with_holes();
        let cleaned = clean_data(&table);
        assert_eq!(cleaned.row_count(), 2);
        assert_eq!(cleaned.rows[0].cells, vec![CellValue::Int(1), CellValue::Int(2)]);
        assert_eq!(cleaned.rows[1].cells, vec![CellValue::Int(5), CellValue::Int(6)]);
        // input untouched
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_preserves_columns_and_order() {
        let cleaned = clean_data(&table_with_holes());
        assert_eq!(cleaned.columns.len(), 2);
        assert_eq!(cleaned.columns[0].name, "a");
        assert_eq!(cleaned.columns[0].inferred_type, CellType::Int);
        assert!(cleaned.rows[0].source_line < cleaned.rows[1].source_line);
    }

    #[test]
    fn test_zero_row_table_is_noop() {
        let empty = Table::new(vec![Column::new("a", 0), Column::new("b", 1)]);
        let cleaned = clean_data(&empty);
        assert_eq!(cleaned.row_count(), 0);
        assert_eq!(cleaned.column_count(), 2);
        assert_eq!(cleaned.columns[1].name, "b");
    }

    #[test]
    fn test_all_rows_missing_keeps_columns() {
        let mut table = Table::new(vec![Column::new("a", 0)]);
        table.add_row(vec![CellValue::Missing], 2);
        table.add_row(vec![CellValue::Missing], 3);
        let cleaned = clean_data(&table);
        assert_eq!(cleaned.row_count(), 0);
        assert_eq!(cleaned.column_count(), 1);
    }

    #[test]
    fn test_idempotent() {
        let once = clean_data(&table_with_holes());
        let twice = clean_data(&once);
        assert_eq!(once.row_count(), twice.row_count());
        assert_eq!(once.rows, twice.rows);
    }

    #[test]
    fn test_nan_and_empty_string_are_not_missing() {
        let mut table = Table::new(vec![Column::new("x", 0)]);
        table.add_row(vec![CellValue::Float(f64::NAN)], 2);
        table.add_row(vec![CellValue::String(String::new())], 3);
        assert_eq!(clean_data(&table).row_count(), 2);
    }
}
