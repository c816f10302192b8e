//! Flat-file persistence: one headerless CSV file per record collection.
//!
//! Collections are loaded wholesale and rewritten wholesale. There is no append path; every
//! mutation flushes every file, which is fine for the handful of rows this tool manages.

mod reader;
mod record_set;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::records::{Application, CsvRecord, Property, Tenant, WishlistEntry};

pub use record_set::RecordSet;

/// Binds a record type to the file it lives in.
pub trait StoredCollection: CsvRecord {
    const FILE_NAME: &'static str;
}

impl StoredCollection for Tenant {
    const FILE_NAME: &'static str = "tenant.csv";
}

impl StoredCollection for Property {
    const FILE_NAME: &'static str = "property.csv";
}

impl StoredCollection for Application {
    const FILE_NAME: &'static str = "application.csv";
}

impl StoredCollection for WishlistEntry {
    const FILE_NAME: &'static str = "wishlist.csv";
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv failure on {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

/// Handle on the directory holding the CSV files.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for<T: StoredCollection>(&self) -> PathBuf {
        self.data_dir.join(T::FILE_NAME)
    }

    /// Loads every decodable row of `T`'s file.
    ///
    /// A file that cannot be opened is logged and treated as empty.
    pub fn load<T: StoredCollection>(&self) -> Vec<T> {
        let path = self.path_for::<T>();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not open record file, starting empty");
                return Vec::new();
            }
        };

        let records: Vec<T> = reader::parse_records(file, T::FILE_NAME);
        tracing::debug!(path = %path.display(), count = records.len(), "loaded {} records", T::KIND);
        records
    }

    /// Overwrites `T`'s file with `records`, one comma-joined row per record.
    ///
    /// Rows go to a sibling `.tmp` file first, which is then renamed over the target.
    pub fn save<T: StoredCollection>(&self, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let path = self.path_for::<T>();
        let staging = path.with_extension("csv.tmp");
        let written = write_rows(&staging, records).and_then(|()| {
            fs::rename(&staging, &path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })
        });
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written?;

        tracing::debug!(path = %path.display(), count = records.len(), "saved {} records", T::KIND);
        Ok(())
    }
}

fn write_rows<T: CsvRecord>(staging: &Path, records: &[T]) -> Result<(), StoreError> {
    let csv_error = |source: csv::Error| StoreError::Csv {
        path: staging.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(staging)
        .map_err(csv_error)?;

    for record in records {
        writer.write_record(record.to_fields()).map_err(csv_error)?;
    }

    writer.flush().map_err(|source| StoreError::Io {
        path: staging.to_path_buf(),
        source,
    })
}
