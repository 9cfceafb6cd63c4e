//! Data source and initialization patterns
//!
//! This example demonstrates the different ways to build a `PermitSearcher`.
//! Pass `--download` to also fetch the live San Francisco export.

use curbside::{Catalog, DataSource, PermitRecord, PermitSearcher, TestDataConfig, data_processing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Curbside PermitSearcher - Data Source Examples\n");

    // Method 1: Synthetic permits (no files, no network)
    println!("1. Synthetic test data:");
    let searcher = PermitSearcher::from_test_data(TestDataConfig::minimal())?;
    println!("   {}\n", searcher.summary());

    // Method 2: An explicit CSV file
    println!("2. An explicit CSV file:");
    let csv = data_processing::create_test_data(&TestDataConfig::default())?;
    let searcher = PermitSearcher::initialize(DataSource::File(csv.path().to_path_buf()))?;
    if let Some(metadata) = searcher.metadata() {
        println!(
            "   {} rows from {} loaded at {}\n",
            metadata.rows, metadata.source, metadata.loaded_at
        );
    }

    // Method 3: A catalog built in code
    println!("3. An in-memory catalog:");
    let catalog: Catalog = [
        ("Curry Up Now", "225 BUSH ST", "APPROVED", 37.7910, -122.4010),
        ("Kona Ice", "1 FERRY BLDG", "REQUESTED", 37.7955, -122.3937),
    ]
    .into_iter()
    .map(|(applicant, address, status, lat, lon)| {
        PermitRecord::new(applicant, address, status, curbside::Coordinate::new(lat, lon))
    })
    .collect();
    let searcher = PermitSearcher::from(catalog);
    println!("   {}\n", searcher.summary());

    // Method 4: The data directory, downloading on first use
    if std::env::args().any(|arg| arg == "--download") {
        println!("4. Data directory ({}):", data_processing::get_data_dir().display());
        let searcher = PermitSearcher::initialize(DataSource::DataDir)?;
        println!("   {}\n", searcher.summary());
    }

    println!("Available data sources:");
    let data_sources = [
        DataSource::File("permits.csv".into()),
        DataSource::DataDir,
        DataSource::Download,
        DataSource::Test(TestDataConfig::minimal()),
    ];

    for source in data_sources {
        println!(
            "  - {}: {}",
            source.label(),
            match source {
                DataSource::File(_) => "A permit CSV at an explicit path",
                DataSource::DataDir => "The data directory, downloaded on first use (default)",
                DataSource::Download => "A fresh download into a temporary file",
                DataSource::Test(_) => "Synthetic data for development",
            }
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = curbside::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_data_sources_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Data sources example should run successfully"
        );
    }
}
