pub mod error;
pub mod race;
