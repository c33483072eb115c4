// ============================================================
// RACE TABLE
// ============================================================
// Concatenation of every loaded frame; immutable once built

use std::collections::HashMap;

use super::cell_value::CellValue;
use super::race_row::{normalize_column_name, RaceFrame, RaceRow, SOURCE_FILE_COLUMN};

/// In-memory table of all race rows, in load order
#[derive(Debug, Clone, Default)]
pub struct RaceTable {
    /// Union of normalized column names, in first-seen order
    columns: Vec<String>,
    rows: Vec<RaceRow>,
}

impl RaceTable {
    /// Concatenate frames in the given order and normalize column names.
    ///
    /// Every row is tagged with its frame's source file under
    /// `SOURCE_FILE`, replacing any column of that name from the file. When
    /// two headers of one frame normalize to the same name the first wins.
    pub fn from_frames(frames: Vec<RaceFrame>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(frames.iter().map(RaceFrame::len).sum());

        for frame in frames {
            let normalized: Vec<String> = frame
                .headers
                .iter()
                .map(|header| normalize_column_name(header))
                .collect();

            let keep: Vec<bool> = normalized
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    name != SOURCE_FILE_COLUMN && !normalized[..idx].contains(name)
                })
                .collect();

            for name in normalized
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(SOURCE_FILE_COLUMN))
            {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }

            for values in frame.rows {
                let mut cells: HashMap<String, CellValue> = HashMap::new();

                for ((name, value), keep) in normalized.iter().zip(values).zip(&keep) {
                    if let (true, Some(value)) = (*keep, value) {
                        cells.insert(name.clone(), value);
                    }
                }

                cells.insert(
                    SOURCE_FILE_COLUMN.to_string(),
                    CellValue::Text(frame.source_file.clone()),
                );
                rows.push(RaceRow::new(frame.source_file.clone(), cells));
            }
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RaceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(source: &str, headers: &[&str], rows: &[&[&str]]) -> RaceFrame {
        let records: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect();
        RaceFrame::from_records(
            source,
            headers.iter().map(|h| h.to_string()).collect(),
            &records,
        )
    }

    #[test]
    fn test_concat_preserves_order_and_tags_source() {
        let table = RaceTable::from_frames(vec![
            frame("a.csv", &["Position"], &[&["1"], &["2"]]),
            frame("b.csv", &["position"], &[&["5"]]),
        ]);

        assert_eq!(table.len(), 3);
        let sources: Vec<&str> = table.rows().iter().map(|r| r.source_file()).collect();
        assert_eq!(sources, vec!["a.csv", "a.csv", "b.csv"]);
        assert_eq!(table.rows()[2].get("POSITION"), Some(&CellValue::Int(5)));
        assert_eq!(
            table.rows()[0].get(SOURCE_FILE_COLUMN),
            Some(&CellValue::Text("a.csv".to_string()))
        );
    }

    #[test]
    fn test_columns_are_normalized_union() {
        let table = RaceTable::from_frames(vec![
            frame("a.csv", &[" laps ", "Vehicle"], &[&["20", "Mazda"]]),
            frame("b.csv", &["LAPS", "tires"], &[&["19", "Slick"]]),
        ]);

        assert_eq!(
            table.columns(),
            &["LAPS", "VEHICLE", "SOURCE_FILE", "TIRES"]
        );
        assert_eq!(table.rows()[0].get("TIRES"), None);
    }

    #[test]
    fn test_first_duplicate_header_wins() {
        let table = RaceTable::from_frames(vec![frame(
            "a.csv",
            &["Vehicle", "VEHICLE "],
            &[&["Mazda", "Ford"]],
        )]);

        assert_eq!(
            table.rows()[0].get("VEHICLE"),
            Some(&CellValue::Text("Mazda".to_string()))
        );
    }

    #[test]
    fn test_source_file_column_is_replaced() {
        let table = RaceTable::from_frames(vec![frame(
            "real.csv",
            &["source_file"],
            &[&["fake.csv"]],
        )]);

        assert_eq!(table.rows()[0].source_file(), "real.csv");
        assert_eq!(
            table.rows()[0].get(SOURCE_FILE_COLUMN),
            Some(&CellValue::Text("real.csv".to_string()))
        );
    }
}
