use std::sync::Arc;

use crate::domain::race::{RaceFile, RaceTable};

/// Lists the race files present in the loaded table
pub struct RaceListingUseCase {
    table: Arc<RaceTable>,
}

impl RaceListingUseCase {
    pub fn new(table: Arc<RaceTable>) -> Self {
        Self { table }
    }

    /// Distinct source files in load order, with their row counts
    pub fn execute(&self) -> Vec<RaceFile> {
        let mut races: Vec<RaceFile> = Vec::new();

        for row in self.table.rows() {
            match races.last_mut() {
                Some(last) if last.race_file == row.source_file() => last.rows += 1,
                _ => races.push(RaceFile {
                    race_file: row.source_file().to_string(),
                    rows: 1,
                }),
            }
        }

        races
    }
}
