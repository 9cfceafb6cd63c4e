//! Nearest search configuration
//!
//! This example shows how `NearestConfigBuilder` changes which permits are
//! ranked and how many are returned.

use curbside::{
    Coordinate, NearestConfig, NearestConfigBuilder, PermitSearcher, StatusFilter, TestDataConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = PermitSearcher::from_test_data(TestDataConfig::sample())?;
    let origin = Coordinate::new(37.7838, -122.3980).ok_or("invalid origin")?;

    println!("Comparing nearest configurations around 675 Folsom St:\n");

    let configs = [
        ("Default", NearestConfig::default()),
        ("Any status", NearestConfigBuilder::any_status().build()),
        (
            "Requested only",
            NearestConfigBuilder::new().status("requested")?.limit(10).build(),
        ),
        (
            "Unknown status",
            NearestConfigBuilder::new()
                .status_filter(StatusFilter::exact("revoked"))
                .build(),
        ),
        ("Zero limit", NearestConfig::builder().limit(0).build()),
    ];

    for (label, config) in &configs {
        let ranked = searcher.nearest_to(origin, config);
        println!(
            "  {label:<15} {} results (status: {:?}, limit: {})",
            ranked.len(),
            config.status,
            config.limit
        );
    }

    // A blank status is a configuration mistake, not "no filter"
    if let Err(err) = NearestConfigBuilder::new().status("   ") {
        println!("\nRejected blank status: {err}");
    }

    Ok(())
}
