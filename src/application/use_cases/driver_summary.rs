use std::sync::Arc;

use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::race::{
    CellValue, DriverSummary, RaceRow, RaceTable, SummaryRequest, FASTEST_LAP_KPH_COLUMN,
    FASTEST_LAP_TIME_COLUMN, LAPS_COLUMN, POSITION_COLUMN, TIRES_COLUMN, TOTAL_TIME_COLUMN,
    VEHICLE_COLUMN,
};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both driver and race.";
pub const NO_MATCH_MESSAGE: &str = "No data found for that driver or race.";

pub struct DriverSummaryUseCase {
    table: Arc<RaceTable>,
    /// Normalized driver column candidates
    driver_columns: Vec<String>,
}

impl DriverSummaryUseCase {
    pub fn new(table: Arc<RaceTable>, driver_columns: Vec<String>) -> Self {
        Self {
            table,
            driver_columns,
        }
    }

    pub fn execute(&self, request: &SummaryRequest) -> Result<DriverSummary> {
        let (driver, race) = match (non_empty(&request.driver), non_empty(&request.race)) {
            (Some(driver), Some(race)) => (driver, race),
            _ => return Err(AppError::BadRequest(MISSING_INPUT_MESSAGE.to_string())),
        };

        let race_lower = race.to_lowercase();
        let driver_lower = driver.to_lowercase();

        let subset: Vec<&RaceRow> = self
            .table
            .rows()
            .iter()
            .filter(|row| row.source_file().to_lowercase() == race_lower)
            .filter(|row| {
                self.driver_cell(row)
                    .map(|name| name.to_string().to_lowercase().contains(&driver_lower))
                    .unwrap_or(false)
            })
            .collect();

        debug!(driver, race, matches = subset.len(), "Filtered race table");

        let Some(first) = subset.first() else {
            return Err(AppError::NotFound(NO_MATCH_MESSAGE.to_string()));
        };

        let first_value = |column: &str| first.get(column).cloned();

        Ok(DriverSummary {
            driver: driver.to_string(),
            race_file: race.to_string(),
            position: first_value(POSITION_COLUMN),
            laps_completed: mean_laps(&subset),
            total_time: first_value(TOTAL_TIME_COLUMN),
            fastest_lap_time: first_value(FASTEST_LAP_TIME_COLUMN),
            fastest_lap_speed_kph: first_value(FASTEST_LAP_KPH_COLUMN),
            vehicle: first_value(VEHICLE_COLUMN),
            tires: first_value(TIRES_COLUMN),
        })
    }

    /// First driver column candidate holding a value in this row
    fn driver_cell<'a>(&self, row: &'a RaceRow) -> Option<&'a CellValue> {
        self.driver_columns.iter().find_map(|column| row.get(column))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Mean of the numeric LAPS values, truncated toward zero
fn mean_laps(rows: &[&RaceRow]) -> Option<i64> {
    let laps: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(LAPS_COLUMN))
        .filter_map(CellValue::as_f64)
        .collect();

    if laps.is_empty() {
        return None;
    }

    let mean = laps.iter().sum::<f64>() / laps.len() as f64;
    Some(mean.trunc() as i64)
}
