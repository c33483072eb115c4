pub mod use_cases;

pub use use_cases::driver_summary::DriverSummaryUseCase;
pub use use_cases::race_listing::RaceListingUseCase;
