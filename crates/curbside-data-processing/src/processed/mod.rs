use super::error::Result;
use crate::raw::{self, DataSource, RawPermitFile};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use polars::prelude::*;
use std::sync::Arc;
use tracing::{info, instrument};

/// Facts about a loaded permit frame.
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Label of the [`DataSource`] the rows were read from
    pub source: String,
    /// When the CSV was collected into memory
    pub loaded_at: DateTime<Utc>,
    /// Number of rows read
    pub rows: usize,
}

struct LoadedPermits {
    df: DataFrame,
    metadata: CatalogMetadata,
}

/// The permit CSV for one [`DataSource`], collected into memory on first access.
///
/// The located file is held for the lifetime of this value so that temporary
/// downloads and test files outlive the frame that reads them.
#[derive(Clone)]
pub struct PermitData {
    source: DataSource,
    raw: Arc<RawPermitFile>,
    loaded: Arc<OnceCell<LoadedPermits>>,
}

impl PermitData {
    /// Locate the CSV for `source`, downloading it if the source requires.
    #[instrument(name = "Locate PermitData", level = "info")]
    pub fn new(source: DataSource) -> Result<Self> {
        let raw = raw::get_raw_data(&source)?;
        info!(path = ?raw.path(), "PermitData: located permit file");
        Ok(Self {
            source,
            raw: Arc::new(raw),
            loaded: Arc::new(OnceCell::new()),
        })
    }

    fn load(&self) -> Result<LoadedPermits> {
        info!(
            path = ?self.raw.path().file_name(),
            "Loading and collecting into memory for the first time..."
        );
        let t_load = std::time::Instant::now();
        let df = raw::get_raw_data_as_lazy_frame(&self.raw)?.collect()?;
        let metadata = CatalogMetadata {
            source: self.source.label(),
            loaded_at: Utc::now(),
            rows: df.height(),
        };
        info!(
            rows = metadata.rows,
            time_collected = ?t_load.elapsed(),
            "Collected into memory"
        );
        Ok(LoadedPermits { df, metadata })
    }

    fn loaded(&self) -> Result<&LoadedPermits> {
        self.loaded.get_or_try_init(|| self.load())
    }

    /// Raw text frame with the columns listed in [`raw::PERMIT_COLUMNS`].
    pub fn permits_df(&self) -> Result<&DataFrame> {
        Ok(&self.loaded()?.df)
    }

    pub fn metadata(&self) -> Result<&CatalogMetadata> {
        Ok(&self.loaded()?.metadata)
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::TestDataConfig;
    use crate::tests_utils::*;

    #[test]
    fn test_permit_data_from_minimal_test_data() {
        let data = PermitData::new(DataSource::Test(TestDataConfig::minimal())).unwrap();
        let df = data.permits_df().unwrap();

        assert_eq!(df.height(), 2);
        assert_has_columns(df, &raw::permit_column_names());

        let metadata = data.metadata().unwrap();
        assert_eq!(metadata.rows, 2);
        assert_eq!(metadata.source, "test_data");
    }

    #[test]
    fn test_permit_data_collects_once() {
        let data = PermitData::new(DataSource::Test(TestDataConfig::sample())).unwrap();
        let first = data.metadata().unwrap().loaded_at;
        let clone = data.clone();
        let second = clone.metadata().unwrap().loaded_at;
        assert_eq!(first, second, "Clones should share the collected frame");
        assert_eq!(
            data.permits_df().unwrap().height(),
            TestDataConfig::sample().total_rows()
        );
    }

    #[test]
    fn test_permit_data_from_explicit_file() {
        let file = crate::test_data::create_test_data(&TestDataConfig::minimal()).unwrap();
        let data = PermitData::new(DataSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(data.permits_df().unwrap().height(), 2);
        assert!(data.metadata().unwrap().source.starts_with("file:"));
    }
}
