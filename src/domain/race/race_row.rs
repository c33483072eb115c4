// ============================================================
// RACE ROW TYPES
// ============================================================
// One parsed file (frame) and the rows it contributes to the table

use std::collections::HashMap;

use super::cell_value::{CellValue, ColumnKind};

/// Column holding the name of the file a row was loaded from
pub const SOURCE_FILE_COLUMN: &str = "SOURCE_FILE";

/// Upper-case and trim a column name so lookups ignore header casing
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Typed rows of a single source file, headers as they appear in the file
#[derive(Debug, Clone)]
pub struct RaceFrame {
    pub source_file: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<CellValue>>>,
}

impl RaceFrame {
    /// Build a frame from raw records, inferring one kind per column.
    /// Records shorter than the header are padded with missing cells.
    pub fn from_records(
        source_file: impl Into<String>,
        headers: Vec<String>,
        records: &[Vec<String>],
    ) -> Self {
        let kinds: Vec<ColumnKind> = (0..headers.len())
            .map(|idx| {
                ColumnKind::infer(
                    records
                        .iter()
                        .filter_map(|record| record.get(idx).map(String::as_str)),
                )
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(idx, kind)| record.get(idx).and_then(|raw| kind.parse(raw)))
                    .collect()
            })
            .collect();

        Self {
            source_file: source_file.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single race-result record in the loaded table
#[derive(Debug, Clone, PartialEq)]
pub struct RaceRow {
    source_file: String,
    /// Non-null cells keyed by normalized column name
    cells: HashMap<String, CellValue>,
}

impl RaceRow {
    pub fn new(source_file: impl Into<String>, cells: HashMap<String, CellValue>) -> Self {
        Self {
            source_file: source_file.into(),
            cells,
        }
    }

    /// Name of the file this row came from (the SOURCE_FILE column)
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Cell for a normalized column name. Absent columns and null cells are
    /// both `None`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  fl_kph "), "FL_KPH");
        assert_eq!(normalize_column_name("Driver_*Extra 3"), "DRIVER_*EXTRA 3");
    }

    #[test]
    fn test_frame_pads_short_records() {
        let frame = RaceFrame::from_records(
            "race1.csv",
            strings(&["POSITION", "LAPS", "VEHICLE"]),
            &[strings(&["1", "20", "Mazda"]), strings(&["2", "19"])],
        );

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.rows[1][0], Some(CellValue::Int(2)));
        assert_eq!(frame.rows[1][2], None);
    }

    #[test]
    fn test_frame_infers_kind_per_column() {
        let frame = RaceFrame::from_records(
            "race1.csv",
            strings(&["POSITION", "FL_KPH"]),
            &[strings(&["1", "145.2"]), strings(&["DNF", "140"])],
        );

        assert_eq!(frame.rows[0][0], Some(CellValue::Text("1".to_string())));
        assert_eq!(frame.rows[1][1], Some(CellValue::Float(140.0)));
    }

    #[test]
    fn test_row_get_missing_column() {
        let mut cells = HashMap::new();
        cells.insert("POSITION".to_string(), CellValue::Int(3));
        let row = RaceRow::new("race1.csv", cells);

        assert_eq!(row.get("POSITION"), Some(&CellValue::Int(3)));
        assert_eq!(row.get("TIRES"), None);
        assert_eq!(row.source_file(), "race1.csv");
    }
}
