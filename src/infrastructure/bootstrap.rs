use std::sync::Arc;

use tracing::{error, info};

use crate::application::{DriverSummaryUseCase, RaceListingUseCase};
use crate::domain::error::Result;
use crate::infrastructure::config::ServiceConfig;
use crate::infrastructure::csv::{CorpusLoader, CsvParser};
use crate::interfaces::http::HttpState;

/// Load the race table once and wire the read-only use cases around it
pub fn setup(config: &ServiceConfig) -> Result<HttpState> {
    let parser = CsvParser::new().with_delimiter(config.delimiter_byte()?);
    let loader = CorpusLoader::new(parser, config.extension());

    info!(data_dir = %config.data_dir.display(), "Loading race results");

    let table = loader.load_dir(&config.data_dir).map_err(|err| {
        error!(
            error = %err,
            data_dir = %config.data_dir.display(),
            "Failed to load race results"
        );
        err
    })?;
    let table = Arc::new(table);

    Ok(HttpState {
        summary_use_case: DriverSummaryUseCase::new(
            table.clone(),
            config.driver_column_names(),
        ),
        race_listing_use_case: RaceListingUseCase::new(table),
    })
}
