use std::path::Path;

use polars::prelude::*;

use super::Result;

/// Source CSV header paired with the column name the rest of the pipeline uses.
pub const PERMIT_COLUMNS: [(&str, &str); 8] = [
    ("locationid", "location_id"),
    ("Applicant", "applicant"),
    ("FacilityType", "facility_type"),
    ("Address", "address"),
    ("Status", "status"),
    ("FoodItems", "food_items"),
    ("Latitude", "latitude"),
    ("Longitude", "longitude"),
];

/// Scan the permit CSV into a lazy frame of raw text columns.
///
/// Every column is read as `String`, coordinates included: turning the text
/// into numbers is the catalog's job, so a garbage cell never fails the load.
/// Row order is the file order.
pub fn get_permits_lf(path: impl AsRef<Path>) -> Result<LazyFrame> {
    Ok(LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .select(PERMIT_COLUMNS.map(|(source, target)| {
            col(source).cast(DataType::String).alias(target)
        })))
}

/// Output column names, in the order [`get_permits_lf`] produces them.
pub fn permit_column_names() -> Vec<&'static str> {
    PERMIT_COLUMNS.iter().map(|(_, target)| *target).collect()
}
