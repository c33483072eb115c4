pub mod driver_summary;
pub mod race_listing;
