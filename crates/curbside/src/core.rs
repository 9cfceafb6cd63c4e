//! The [`PermitSearcher`] facade that request handlers talk to.
//!
//! A searcher owns one immutable [`Catalog`] and answers every query against
//! it through `&self`, so a single instance can be cloned into as many
//! threads as needed.
//!
//! ```rust
//! use curbside::{NearestParams, PermitSearcher, TestDataConfig};
//!
//! let searcher = PermitSearcher::from_test_data(TestDataConfig::minimal())?;
//!
//! let tacos = searcher.search_by_applicant(Some("joe"), None)?;
//! assert_eq!(tacos[0].applicant(), "Joe's Tacos");
//!
//! let nearby = searcher.nearest(&NearestParams::new("37.77", "-122.42"))?;
//! assert_eq!(nearby.len(), 1);
//! # Ok::<(), curbside::error::CurbsideError>(())
//! ```

use curbside_data_processing::{CatalogMetadata, DataSource, PermitData, TestDataConfig};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    catalog::Catalog,
    error::CurbsideError,
    record::{Coordinate, PermitRecord},
    search::{
        NearestConfig, NearestParams, NearestQuery, RankedPermit, StatusFilter, ValidationError,
        address_search_inner, applicant_search_inner, nearest_inner, present, require_name,
    },
};

/// Query engine over a loaded permit catalog.
///
/// # Examples
///
/// ```rust
/// use curbside::{NearestConfig, PermitSearcher, TestDataConfig};
///
/// let searcher = PermitSearcher::from_test_data(TestDataConfig::sample())?;
/// let origin = curbside::Coordinate::new(37.7749, -122.4194).unwrap();
/// let config = NearestConfig::builder().include_all_statuses().limit(3).build();
///
/// for ranked in searcher.nearest_to(origin, &config) {
///     println!("{:.2} km  {}", ranked.distance_km, ranked.record.applicant());
/// }
/// # Ok::<(), curbside::error::CurbsideError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PermitSearcher {
    catalog: Catalog,
    metadata: Option<CatalogMetadata>,
}

impl PermitSearcher {
    /// Load the permit CSV from `data_source` and build the catalog.
    ///
    /// Loading happens exactly once; the returned searcher never touches the
    /// data source again.
    ///
    /// ```rust,no_run
    /// use curbside::{DataSource, PermitSearcher};
    ///
    /// let searcher = PermitSearcher::initialize(DataSource::DataDir)?;
    /// println!("{}", searcher.summary());
    /// # Ok::<(), curbside::error::CurbsideError>(())
    /// ```
    #[instrument(name = "Initialize PermitSearcher", level = "info")]
    pub fn initialize(data_source: DataSource) -> Result<Self, CurbsideError> {
        let t_init = std::time::Instant::now();

        let data = PermitData::new(data_source)?;
        let catalog = Catalog::from_df(data.permits_df()?)?;
        let metadata = data.metadata()?.clone();

        info!(
            records = catalog.len(),
            source = %metadata.source,
            elapsed_seconds = ?t_init.elapsed(),
            "PermitSearcher initialization complete"
        );

        Ok(Self {
            catalog,
            metadata: Some(metadata),
        })
    }

    /// Build a searcher over synthetic permits.
    pub fn from_test_data(config: TestDataConfig) -> Result<Self, CurbsideError> {
        Self::initialize(DataSource::Test(config))
    }

    /// Wrap an already built catalog. No load metadata is recorded.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            metadata: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where and when the catalog was loaded, if it came from a [`DataSource`].
    pub fn metadata(&self) -> Option<&CatalogMetadata> {
        self.metadata.as_ref()
    }

    /// One line description of the loaded catalog.
    pub fn summary(&self) -> String {
        let source = self
            .metadata
            .as_ref()
            .map_or("in-memory catalog", |m| m.source.as_str());
        format!(
            "PermitSearcher over {} permits from {} ({} without coordinates)",
            self.catalog.len(),
            source,
            self.catalog.without_coordinates()
        )
    }

    /// Every permit in catalog order.
    pub fn all(&self) -> &[PermitRecord] {
        self.catalog.records()
    }

    /// Permits whose applicant name contains `name`, ignoring case.
    ///
    /// `status`, when present and not blank, must equal the permit status
    /// exactly (ignoring case); `all` disables the filter.
    #[instrument(name = "Applicant Search", level = "debug", skip(self))]
    pub fn search_by_applicant(
        &self,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<&PermitRecord>, ValidationError> {
        let name = require_name(name)?;
        let status = StatusFilter::from_param(status).unwrap_or_default();
        let t_search = std::time::Instant::now();

        let found = applicant_search_inner(self.catalog.records(), name, &status);

        debug!(
            matches = found.len(),
            elapsed = ?t_search.elapsed(),
            "Applicant search complete"
        );
        Ok(found)
    }

    /// Permits whose address contains `address`, ignoring case.
    ///
    /// Absent or blank returns the whole catalog. There is no status filter.
    #[instrument(name = "Address Search", level = "debug", skip(self))]
    pub fn search_by_address(&self, address: Option<&str>) -> Vec<&PermitRecord> {
        let address = present(address);
        let t_search = std::time::Instant::now();

        let found = address_search_inner(self.catalog.records(), address);

        debug!(
            matches = found.len(),
            elapsed = ?t_search.elapsed(),
            "Address search complete"
        );
        found
    }

    /// The closest permits to a point given as raw text parameters.
    ///
    /// Parameters are validated before the catalog is scanned; see
    /// [`NearestParams::parse`] for the defaults.
    pub fn nearest(&self, params: &NearestParams<'_>) -> Result<Vec<RankedPermit<'_>>, ValidationError> {
        let query = params.parse()?;
        Ok(self.nearest_query(&query))
    }

    /// The closest permits to an already validated coordinate.
    pub fn nearest_to(&self, origin: Coordinate, config: &NearestConfig) -> Vec<RankedPermit<'_>> {
        self.nearest_query(&NearestQuery::new(origin).with_config(config.clone()))
    }

    /// Answer many nearest queries in parallel. Results are in query order.
    #[instrument(name = "Bulk Nearest Search", level = "debug", skip_all, fields(queries = queries.len()))]
    pub fn nearest_bulk(&self, queries: &[NearestQuery]) -> Vec<Vec<RankedPermit<'_>>> {
        let t_search = std::time::Instant::now();
        let records = self.catalog.records();

        let results = queries
            .par_iter()
            .map(|query| nearest_inner(records, query))
            .collect::<Vec<_>>();

        debug!(elapsed = ?t_search.elapsed(), "Bulk nearest search complete");
        results
    }

    #[instrument(name = "Nearest Search", level = "debug", skip_all, fields(origin = %query.origin, limit = query.config.limit))]
    fn nearest_query(&self, query: &NearestQuery) -> Vec<RankedPermit<'_>> {
        let t_search = std::time::Instant::now();

        let ranked = nearest_inner(self.catalog.records(), query);

        debug!(
            results = ranked.len(),
            elapsed = ?t_search.elapsed(),
            "Nearest search complete"
        );
        ranked
    }
}

impl From<Catalog> for PermitSearcher {
    fn from(catalog: Catalog) -> Self {
        Self::from_catalog(catalog)
    }
}
