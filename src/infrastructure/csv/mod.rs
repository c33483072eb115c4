// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimited-file parsing and corpus loading

mod corpus_loader;
mod csv_parser;

pub use corpus_loader::CorpusLoader;
pub use csv_parser::CsvParser;
