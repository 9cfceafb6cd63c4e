use std::io::Write;

use tempfile::NamedTempFile;
use tracing::info;

use super::error::Result;

const CSV_HEADER: &str =
    "locationid,Applicant,FacilityType,Address,Status,FoodItems,Latitude,Longitude";

/// (locationid, Applicant, FacilityType, Address, Status, FoodItems, Latitude, Longitude)
type PermitRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const MINIMAL_PERMITS: [PermitRow; 2] = [
    (
        "1000001",
        "Joe's Tacos",
        "Truck",
        "100 Main St",
        "APPROVED",
        "Tacos: burritos: horchata",
        "37.77",
        "-122.42",
    ),
    (
        "1000002",
        "Best Burgers",
        "Truck",
        "200 Main St",
        "REQUESTED",
        "Burgers: fries",
        "37.78",
        "-122.41",
    ),
];

const REALISTIC_PERMITS: [PermitRow; 12] = [
    (
        "1565556",
        "Reecees Soulicious",
        "Truck",
        "350 RHODE ISLAND ST",
        "APPROVED",
        "Fried Chicken: Fried Fish: Greens: Mac & Cheese: Peach Cobbler",
        "37.7666",
        "-122.4023",
    ),
    (
        "1571753",
        "The Geez Freeze",
        "Truck",
        "675 FOLSOM ST",
        "REQUESTED",
        "Snow Cones: Soft Serve Ice Cream & Frozen Virgin Drinks",
        "37.7838",
        "-122.3980",
    ),
    (
        "1585965",
        "Bonito Poke",
        "Truck",
        "1 MARKET ST",
        "APPROVED",
        "Poke bowls: sushi burritos: soda",
        "37.7941",
        "-122.3951",
    ),
    (
        "1569152",
        "Treats by the Bay LLC",
        "Truck",
        "1301 CESAR CHAVEZ ST",
        "APPROVED",
        "Prepackaged Kettlecorn",
        "37.7502",
        "-122.3867",
    ),
    (
        "1591843",
        "San Pancho's Tacos",
        "Truck",
        "491 BAY SHORE BLVD",
        "APPROVED",
        "Tacos: Burritos: Quesadillas: Tortas",
        "37.7409",
        "-122.4069",
    ),
    (
        "1575184",
        "Casita Vegana",
        "Truck",
        "1 CALIFORNIA ST",
        "EXPIRED",
        "Vegan empanadas: coffee: pastries",
        "37.7931",
        "-122.3976",
    ),
    (
        "1587522",
        "Off the Grid Services, LLC",
        "Truck",
        "2301 MISSION ST",
        "REQUESTED",
        "Everything",
        "37.7605",
        "-122.4190",
    ),
    (
        "1336738",
        "Natan's Catering",
        "Push Cart",
        "100 HOWARD ST",
        "APPROVED",
        "Burgers: melts: hot dogs: burritos: sandwiches: fries",
        "37.7921",
        "-122.3936",
    ),
    (
        "1591822",
        "Cochinita",
        "Truck",
        "2 MARINA BLVD",
        "SUSPEND",
        "Yucatan food: cochinita pibil: panuchos",
        "37.8061",
        "-122.4314",
    ),
    (
        "1163788",
        "Park's Catering",
        "Truck",
        "1800 FOLSOM ST",
        "APPROVED",
        "Cold Truck: Hamburger: cheeseburgers: hot dogs",
        "37.7689",
        "-122.4155",
    ),
    (
        "1337512",
        "Halal Cart, LLC",
        "Push Cart",
        "684 FOLSOM ST",
        "ISSUED",
        "Halal gyros: chicken over rice: falafel",
        "37.7834",
        "-122.3985",
    ),
    (
        "1569200",
        "Linda's Catering",
        "Truck",
        "0 Assessors Block 7283/Lot004",
        "APPROVED",
        "Filipino food: lumpia: adobo",
        "0",
        "0",
    ),
];

/// Rows whose coordinates the catalog cannot use.
const INVALID_COORDINATE_PERMITS: [PermitRow; 3] = [
    (
        "1700001",
        "Nowhere Nachos",
        "Truck",
        "UNKNOWN",
        "APPROVED",
        "Nachos",
        "",
        "",
    ),
    (
        "1700002",
        "Mystery Meals",
        "Truck",
        "555 MARKET ST",
        "APPROVED",
        "Daily special",
        "N/A",
        "-122.40",
    ),
    (
        "1700003",
        "Off The Map Grill",
        "Truck",
        "99 EMBARCADERO",
        "APPROVED",
        "Grilled sandwiches",
        "137.79",
        "-122.39",
    ),
];

/// Configuration for test data generation
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    /// Number of permit rows with usable coordinates
    pub permit_rows: usize,
    /// Whether to use realistic San Francisco rows or the two-row minimal set
    pub realistic_data: bool,
    /// Append rows whose coordinates are blank, non-numeric or out of range
    pub include_invalid_coordinates: bool,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            permit_rows: 40,
            realistic_data: true,
            include_invalid_coordinates: true,
        }
    }
}

impl TestDataConfig {
    /// The two-row catalog used throughout the unit tests
    pub fn minimal() -> Self {
        Self {
            permit_rows: MINIMAL_PERMITS.len(),
            realistic_data: false,
            include_invalid_coordinates: false,
        }
    }

    /// Sample data for integration tests
    pub fn sample() -> Self {
        Self {
            permit_rows: 100,
            realistic_data: true,
            include_invalid_coordinates: true,
        }
    }

    /// Total rows [`create_test_data`] writes for this configuration.
    pub fn total_rows(&self) -> usize {
        let base = if self.realistic_data {
            self.permit_rows
        } else {
            self.permit_rows.min(MINIMAL_PERMITS.len())
        };
        if self.include_invalid_coordinates {
            base + INVALID_COORDINATE_PERMITS.len()
        } else {
            base
        }
    }
}

/// Create a permit CSV in a temporary file.
///
/// Realistic rows are cycled when `permit_rows` exceeds the built-in set;
/// repeats get a numeric suffix on the applicant name so every row stays
/// distinguishable.
pub fn create_test_data(config: &TestDataConfig) -> Result<NamedTempFile> {
    info!("Creating test data with config: {:?}", config);

    let mut file = NamedTempFile::with_suffix(".csv")?;
    writeln!(file, "{CSV_HEADER}")?;

    if config.realistic_data {
        write_realistic_permits(&mut file, config.permit_rows)?;
    } else {
        write_minimal_permits(&mut file, config.permit_rows)?;
    }
    if config.include_invalid_coordinates {
        for row in &INVALID_COORDINATE_PERMITS {
            write_row(&mut file, row, None)?;
        }
    }

    file.flush()?;
    Ok(file)
}

fn write_minimal_permits(file: &mut NamedTempFile, rows: usize) -> Result<()> {
    for row in MINIMAL_PERMITS.iter().take(rows) {
        write_row(file, row, None)?;
    }
    Ok(())
}

fn write_realistic_permits(file: &mut NamedTempFile, rows: usize) -> Result<()> {
    for (i, row) in REALISTIC_PERMITS.iter().cycle().take(rows).enumerate() {
        let round = i / REALISTIC_PERMITS.len();
        write_row(file, row, (round > 0).then_some(round))?;
    }
    Ok(())
}

fn write_row(file: &mut NamedTempFile, row: &PermitRow, suffix: Option<usize>) -> Result<()> {
    let (location_id, applicant, facility_type, address, status, food_items, lat, lon) = *row;
    let applicant = match suffix {
        Some(n) => format!("{applicant} #{n}"),
        None => applicant.to_string(),
    };
    writeln!(
        file,
        "{},{},{},{},{},{},{},{}",
        csv_field(location_id),
        csv_field(&applicant),
        csv_field(facility_type),
        csv_field(address),
        csv_field(status),
        csv_field(food_items),
        csv_field(lat),
        csv_field(lon),
    )?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
