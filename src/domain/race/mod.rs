// ============================================================
// RACE DOMAIN LAYER
// ============================================================
// Race-result rows, the loaded table and query records
// No I/O, no async

mod cell_value;
mod driver_summary;
mod race_row;
mod race_table;

pub use cell_value::{CellValue, ColumnKind};
pub use driver_summary::{DriverSummary, RaceFile, SummaryRequest};
pub use race_row::{normalize_column_name, RaceFrame, RaceRow, SOURCE_FILE_COLUMN};
pub use race_table::RaceTable;

pub const POSITION_COLUMN: &str = "POSITION";
pub const LAPS_COLUMN: &str = "LAPS";
pub const TOTAL_TIME_COLUMN: &str = "TOTAL_TIME";
pub const FASTEST_LAP_TIME_COLUMN: &str = "FL_TIME";
pub const FASTEST_LAP_KPH_COLUMN: &str = "FL_KPH";
pub const VEHICLE_COLUMN: &str = "VEHICLE";
pub const TIRES_COLUMN: &str = "TIRES";
