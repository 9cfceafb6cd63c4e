//! Curbside - Food Truck Permit Search
//!
//! Curbside answers ad-hoc queries over a catalog of mobile food facility
//! permits: who holds a permit (applicant name), where they operate (street
//! address), and which permitted trucks are closest to a point on the map.
//!
//! # Quick Start
//!
//! ```rust
//! use curbside::{NearestParams, PermitSearcher, TestDataConfig};
//!
//! // Build a searcher over synthetic San Francisco permits
//! let searcher = PermitSearcher::from_test_data(TestDataConfig::sample())?;
//!
//! // Case-insensitive substring search on the applicant
//! let tacos = searcher.search_by_applicant(Some("tacos"), None)?;
//! for permit in &tacos {
//!     println!("{} at {}", permit.applicant(), permit.address());
//! }
//!
//! // Everything on Folsom Street, whatever its status
//! let folsom = searcher.search_by_address(Some("folsom"));
//!
//! // Five closest approved trucks to downtown
//! let nearby = searcher.nearest(&NearestParams::new("37.7749", "-122.4194"))?;
//! if let Some(first) = nearby.first() {
//!     println!("Closest: {} ({:.2} km)", first.record.applicant(), first.distance_km);
//! }
//! # Ok::<(), curbside::error::CurbsideError>(())
//! ```
//!
//! # Features
//!
//! - **Text Search**: Substring matching on applicant and address, exact status filtering
//! - **Nearest Search**: Great-circle (haversine) ranking with deterministic tie-breaks
//! - **Validation**: Raw request parameters become typed queries or a [`ValidationError`]
//!   with a stable reason code
//! - **Batch Processing**: Answer many nearest queries in parallel against one catalog
//!
//! # Data
//!
//! Permits are read from the San Francisco `Mobile_Food_Facility_Permit.csv`
//! export. With the `download_data` feature the file is fetched on first use
//! into the data directory (`$DATA_DIR`, the platform data directory, or
//! `./curbside_data`).
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod catalog;
mod config;
mod core;
pub mod error;
pub mod geo;
mod record;
mod search;

pub use core::PermitSearcher;

pub use catalog::Catalog;
pub use config::NearestConfigBuilder;
pub use curbside_data_processing as data_processing;
pub use curbside_data_processing::{CatalogMetadata, DataSource, TestDataConfig};
pub use polars;
pub use record::{Coordinate, PermitRecord, RawPermit};
pub use search::{
    DEFAULT_NEAREST_LIMIT, NearestConfig, NearestParams, NearestQuery, RankedPermit, StatusFilter,
    ValidationError, parse_coordinate, parse_limit,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Curbside library.
///
/// Installs a global `tracing` subscriber once. `RUST_LOG` takes precedence
/// over `level`; noisy dependencies are held at `warn` either way. Later calls
/// are no-ops.
///
/// # Examples
///
/// ```rust
/// use curbside::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), curbside::error::CurbsideError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::CurbsideError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("polars=warn".parse()?)
            .add_directive("reqwest=warn".parse()?)
            .add_directive("hyper_util=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(())
    })
}
