use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::core::NgError;
use crate::flow::model::{FlowRow, HEADER};

/// A CSV file rows are appended to, one open/write/close per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTarget {
    directory: PathBuf,
    path: PathBuf,
}

impl CsvTarget {
    /// Validates the location; nothing is created until rows are written.
    pub fn new(output_directory: impl AsRef<Path>, file_name: &str) -> Result<Self, NgError> {
        let directory = output_directory.as_ref();
        if directory.as_os_str().is_empty() {
            return Err(NgError::InvalidConfig("'output_directory' must not be empty".into()));
        }
        if file_name.is_empty() {
            return Err(NgError::InvalidConfig("'file_name' must not be empty".into()));
        }
        // The file lives directly in `output_directory`, the only directory `prepare` creates.
        if file_name.contains(['/', '\\']) {
            return Err(NgError::InvalidConfig(format!(
                "'file_name' must be a bare file name, got {file_name:?}"
            )));
        }
        let is_csv = Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(NgError::InvalidConfig(format!(
                "'file_name' must end in .csv, got {file_name:?}"
            )));
        }

        Ok(Self {
            directory: directory.to_path_buf(),
            path: directory.join(file_name),
        })
    }

    /// Full path of the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the directory exists and, if asked, starts a new or empty file with the header.
    pub(crate) fn prepare(&self, write_header: bool) -> Result<(), NgError> {
        fs::create_dir_all(&self.directory)?;

        if write_header {
            let empty = match fs::metadata(&self.path) {
                Ok(meta) => meta.len() == 0,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
                Err(e) => return Err(e.into()),
            };
            if empty {
                self.append_record(HEADER)?;
            }
        }
        Ok(())
    }

    pub(crate) fn append(&self, row: &FlowRow) -> Result<(), NgError> {
        self.append_record(row.as_record())
    }

    fn append_record(&self, record: [&str; 9]) -> Result<(), NgError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record(record)?;
        wtr.flush()?;
        Ok(())
    }
}
