//! Loading pipeline for the mobile food facility permit dataset.
//!
//! This crate owns everything that happens before a query can run: finding
//! (or downloading) the permit CSV, reading it with polars into a frame of raw
//! text columns, and generating synthetic CSVs for tests. The `curbside`
//! crate turns the resulting frame into its immutable catalog.
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use tracing::warn;

mod error;
pub mod processed;
pub mod raw;
pub mod test_data;

static TEST_DATA_DIR: Lazy<tempfile::TempDir> = Lazy::new(|| {
    tempfile::TempDir::new().expect("Failed to create global temporary test data directory")
});

pub const DATA_DIR_DEFAULT: &str = "./curbside_data";

/// Centralized function to determine if we should use test data.
///
/// True under `cfg(test)`, or with the `test_data` feature when
/// `USE_TEST_DATA` is `true` or `1`. When it holds, [`DATA_DIR`] is an empty
/// temporary directory and [`raw::DataSource::DataDir`] falls back to
/// synthetic permits rather than downloading the real export.
pub fn should_use_test_data() -> bool {
    let is_test_environment = cfg!(test) || cfg!(doctest);

    #[cfg(feature = "test_data")]
    let explicit_test_data = std::env::var("USE_TEST_DATA")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    #[cfg(not(feature = "test_data"))]
    let explicit_test_data = false;

    is_test_environment || explicit_test_data
}

/// Global data directory path that automatically determines the appropriate location.
///
/// Resolution order: a temporary directory under test, then `$DATA_DIR`, then
/// the platform data directory (with the `system-dirs` feature), and finally
/// [`DATA_DIR_DEFAULT`].
pub static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if should_use_test_data() {
        let temp_dir = TEST_DATA_DIR.path().to_path_buf();
        warn!(temp_dir = ?temp_dir, "Using temporary data directory for tests");
        return temp_dir;
    }
    if let Ok(dir) = std::env::var("DATA_DIR") {
        return PathBuf::from(dir);
    }
    #[cfg(feature = "system-dirs")]
    if let Some(dirs) = directories::ProjectDirs::from("", "", "curbside") {
        return dirs.data_dir().to_path_buf();
    }
    PathBuf::from(DATA_DIR_DEFAULT)
});

pub fn get_data_dir() -> &'static Path {
    DATA_DIR.as_path()
}

pub use error::{DataError, Result};

pub use processed::{CatalogMetadata, PermitData};
pub use raw::{DataSource, PERMITS_FILE_NAME, RawPermitFile};
pub use test_data::{TestDataConfig, create_test_data};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_temporary_under_test() {
        assert!(should_use_test_data());
        assert_eq!(get_data_dir(), TEST_DATA_DIR.path());
    }
}
