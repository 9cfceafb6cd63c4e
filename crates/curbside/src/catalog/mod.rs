//! The immutable permit catalog every query runs against.

use std::{fmt, slice, sync::Arc};

use polars::prelude::*;
use tracing::{info, warn};

use crate::record::PermitRecord;

/// Ordered, read-only sequence of permit records.
///
/// Built once from a finished `Vec` and never modified afterwards. Clones share
/// the same allocation, so a catalog can be handed to any number of threads
/// without locking. Order is the order the records were read in.
#[derive(Clone, Default)]
pub struct Catalog {
    records: Arc<[PermitRecord]>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<PermitRecord>) -> Self {
        let catalog = Self {
            records: records.into(),
        };
        let missing = catalog.without_coordinates();
        if missing > 0 {
            warn!(
                missing,
                total = catalog.len(),
                "Records without a usable coordinate are excluded from nearest search"
            );
        }
        catalog
    }

    /// Build a catalog from the loader's raw text frame.
    pub fn from_df(df: &DataFrame) -> PolarsResult<Self> {
        let records = PermitRecord::from_df(df)?;
        info!(records = records.len(), "Catalog built from DataFrame");
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn records(&self) -> &[PermitRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, PermitRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose coordinate could not be parsed.
    #[must_use]
    pub fn without_coordinates(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.coordinate().is_none())
            .count()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("records", &self.len())
            .finish()
    }
}

impl FromIterator<PermitRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PermitRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PermitRecord;
    type IntoIter = slice::Iter<'a, PermitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
