// ============================================================
// CORPUS LOADER
// ============================================================
// Scan the data directory and build the race table

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::csv_parser::CsvParser;
use crate::domain::error::{AppError, Result};
use crate::domain::race::{RaceFrame, RaceTable};

pub struct CorpusLoader {
    parser: CsvParser,
    /// Extension of tabular files, without the dot
    extension: String,
}

impl CorpusLoader {
    pub fn new(parser: CsvParser, extension: impl Into<String>) -> Self {
        Self {
            parser,
            extension: extension.into(),
        }
    }

    /// Load every tabular file in `dir` into one table.
    ///
    /// Files that fail to parse are logged and skipped. Fails with
    /// `NoData` when the directory holds no tabular files or none of them
    /// could be parsed.
    pub fn load_dir(&self, dir: &Path) -> Result<RaceTable> {
        let files = self.discover_files(dir)?;

        if files.is_empty() {
            return Err(AppError::NoData(format!(
                "no .{} files found in {}",
                self.extension,
                dir.display()
            )));
        }

        let mut frames: Vec<RaceFrame> = Vec::with_capacity(files.len());
        for path in &files {
            match self.parser.parse_file(path) {
                Ok(frame) => frames.push(frame),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "Skipping unreadable race file");
                }
            }
        }

        if frames.is_empty() {
            return Err(AppError::NoData(format!(
                "none of the {} files in {} could be parsed",
                files.len(),
                dir.display()
            )));
        }

        let loaded_files = frames.len();
        let table = RaceTable::from_frames(frames);

        info!(
            files = loaded_files,
            skipped = files.len() - loaded_files,
            rows = table.len(),
            columns = table.columns().len(),
            "Loaded race results"
        );

        Ok(table)
    }

    /// Regular files directly inside `dir` with the configured extension,
    /// sorted by file name
    pub fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::Io(format!("Failed to read data dir {}: {}", dir.display(), e))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && self.has_extension(&path) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::race::CellValue;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn loader() -> CorpusLoader {
        CorpusLoader::new(CsvParser::new(), "csv")
    }

    #[test]
    fn test_load_dir_concatenates_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "race2.csv", "POSITION;DRIVER\n1;B. Brown");
        write(&dir, "race1.csv", "position;driver\n1;J. Smith\n2;A. Jones");

        let table = loader().load_dir(dir.path()).unwrap();

        let sources: Vec<&str> = table.rows().iter().map(|r| r.source_file()).collect();
        assert_eq!(sources, vec!["race1.csv", "race1.csv", "race2.csv"]);
        assert_eq!(
            table.rows()[1].get("DRIVER"),
            Some(&CellValue::Text("A. Jones".to_string()))
        );
    }

    #[test]
    fn test_load_dir_ignores_other_extensions_and_subdirs() {
        let dir = TempDir::new().unwrap();
        write(&dir, "race1.CSV", "A\n1");
        write(&dir, "notes.txt", "A\n2");
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = loader().discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("race1.CSV"));
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bad.csv", "A;B\n1;2;3");
        write(&dir, "good.csv", "A;B\n1;2");

        let table = loader().load_dir(dir.path()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].source_file(), "good.csv");
    }

    #[test]
    fn test_load_empty_dir_is_no_data() {
        let dir = TempDir::new().unwrap();
        write(&dir, "readme.md", "nothing here");

        let err = loader().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::NoData(_)));
    }

    #[test]
    fn test_all_files_failing_is_no_data() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.csv", "");

        let err = loader().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::NoData(_)));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = loader().load_dir(&missing).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
