use serde::{Deserialize, Serialize};

use super::cell_value::CellValue;

/// Body of a driver summary query. Both fields are required; they are
/// optional here so a missing field is reported as a bad request instead
/// of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
}

/// Summary statistics of one driver in one race
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSummary {
    pub driver: String,
    pub race_file: String,
    pub position: Option<CellValue>,
    pub laps_completed: Option<i64>,
    pub total_time: Option<CellValue>,
    pub fastest_lap_time: Option<CellValue>,
    pub fastest_lap_speed_kph: Option<CellValue>,
    pub vehicle: Option<CellValue>,
    pub tires: Option<CellValue>,
}

/// A loaded race file and how many rows it contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceFile {
    pub race_file: String,
    pub rows: usize,
}
