use polars::prelude::LazyFrame;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, instrument, warn};

#[cfg(feature = "download_data")]
pub mod fetch;

pub(super) mod permits;

pub use super::error::Result;
use crate::{DataError, test_data::TestDataConfig};
pub use permits::{PERMIT_COLUMNS, permit_column_names};

/// File name of the permit export inside `<DATA_DIR>/raw/`.
pub const PERMITS_FILE_NAME: &str = "Mobile_Food_Facility_Permit.csv";

/// Where the permit CSV comes from.
#[derive(Debug, Clone, Default)]
pub enum DataSource {
    /// A CSV at an explicit path.
    File(PathBuf),
    /// `<DATA_DIR>/raw/Mobile_Food_Facility_Permit.csv`, downloaded on first use
    /// when the `download_data` feature is enabled.
    #[default]
    DataDir,
    /// A fresh download into a temporary file.
    Download,
    /// Synthetic rows written to a temporary file.
    Test(TestDataConfig),
}

impl DataSource {
    /// Short human readable label, recorded in the catalog metadata.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => format!("file:{}", path.display()),
            Self::DataDir => "data_dir".to_string(),
            Self::Download => "download".to_string(),
            Self::Test(_) => "test_data".to_string(),
        }
    }
}

/// A located permit CSV. Temporary files are deleted when this is dropped.
#[derive(Debug)]
pub enum RawPermitFile {
    Path(PathBuf),
    Temp(NamedTempFile),
}

impl RawPermitFile {
    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Temp(file) => file.path(),
        }
    }
}

impl AsRef<Path> for RawPermitFile {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

/// Resolve a [`DataSource`] to a CSV file on disk.
///
/// For [`DataSource::DataDir`] the file is looked up in `<DATA_DIR>/raw/`. If
/// it is missing while [`crate::should_use_test_data`] holds, synthetic rows
/// from [`TestDataConfig::default`] are used instead and nothing is fetched.
/// Otherwise, with the `download_data` feature it is downloaded there first;
/// without it a `RequiredFilesNotFound` error is returned.
#[instrument(name = "Get permit raw data", level = "info")]
pub fn get_raw_data(source: &DataSource) -> Result<RawPermitFile> {
    match source {
        DataSource::File(path) => {
            if path.exists() {
                Ok(RawPermitFile::Path(path.clone()))
            } else {
                Err(DataError::PermitFileNotFound(path.clone()))
            }
        }
        DataSource::DataDir => {
            let raw_dir = crate::get_data_dir().join("raw");
            info!("Checking for raw data in: {}", raw_dir.display());
            let permits_path = raw_dir.join(PERMITS_FILE_NAME);

            if permits_path.exists() {
                info!("Found existing permit file");
                return Ok(RawPermitFile::Path(permits_path));
            }

            warn!("Permit file not found");

            if crate::should_use_test_data() {
                info!("Test data in use, generating synthetic permits instead of downloading");
                return Ok(RawPermitFile::Temp(crate::test_data::create_test_data(
                    &TestDataConfig::default(),
                )?));
            }

            #[cfg(feature = "download_data")]
            {
                info!("Attempting to download permit data as download_data feature is enabled.");
                fetch::download_permits_to(&permits_path)?;
                Ok(RawPermitFile::Path(permits_path))
            }
            #[cfg(not(feature = "download_data"))]
            {
                warn!("Download_data feature is disabled. Cannot download missing files.");
                Err(DataError::RequiredFilesNotFound)
            }
        }
        DataSource::Download => {
            #[cfg(feature = "download_data")]
            {
                Ok(RawPermitFile::Temp(fetch::download_permits()?))
            }
            #[cfg(not(feature = "download_data"))]
            {
                Err(DataError::DownloadDisabled)
            }
        }
        DataSource::Test(config) => Ok(RawPermitFile::Temp(
            crate::test_data::create_test_data(config)?,
        )),
    }
}

#[instrument(name = "Transform permit data", skip_all, level = "info")]
pub fn get_raw_data_as_lazy_frame(raw_data: &RawPermitFile) -> Result<LazyFrame> {
    permits::get_permits_lf(raw_data)
}
