//! Nearest food trucks to a point
//!
//! This example demonstrates geospatial search:
//! - Raw text parameters, exactly as a request handler receives them
//! - The typed entry point for already validated coordinates
//! - Answering many queries at once with `nearest_bulk`

use std::time::Instant;

use curbside::{
    Coordinate, NearestConfig, NearestParams, NearestQuery, PermitSearcher, RankedPermit,
    TestDataConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = PermitSearcher::from_test_data(TestDataConfig::sample())?;

    // Defaults: approved permits only, five results
    println!("Closest approved trucks to Union Square:");
    let ranked = searcher.nearest(&NearestParams::new("37.7880", "-122.4075"))?;
    print_ranked(&ranked);

    // Any status, three results
    println!("\nClosest three trucks of any status to the Mission:");
    let params = NearestParams::new("37.7599", "-122.4148")
        .with_status("all")
        .with_limit("3");
    print_ranked(&searcher.nearest(&params)?);

    // Bad input never reaches the catalog
    for params in [
        NearestParams::default(),
        NearestParams::new("north", "-122.4"),
        NearestParams::new("37.77", "-122.42").with_limit("-1"),
    ] {
        if let Err(err) = searcher.nearest(&params) {
            println!("\nRejected {params:?}: {}", err.reason());
        }
    }

    batch_nearest(&searcher)?;

    Ok(())
}

fn batch_nearest(searcher: &PermitSearcher) -> Result<(), Box<dyn std::error::Error>> {
    let landmarks = [
        ("Ferry Building", 37.7955, -122.3937),
        ("Oracle Park", 37.7786, -122.3893),
        ("Marina Green", 37.8065, -122.4367),
        ("Bernal Heights", 37.7436, -122.4148),
    ];
    let config = NearestConfig::builder().limit(1).build();

    let queries = landmarks
        .iter()
        .map(|&(_, lat, lon)| {
            Coordinate::new(lat, lon)
                .map(|origin| NearestQuery::new(origin).with_config(config.clone()))
                .ok_or("landmark coordinate out of range")
        })
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();
    let results = searcher.nearest_bulk(&queries);
    println!(
        "\nClosest approved truck to {} landmarks ({:?}):",
        queries.len(),
        start.elapsed()
    );

    for ((name, _, _), ranked) in landmarks.iter().zip(&results) {
        match ranked.first() {
            Some(best) => println!(
                "  {name}: {} ({:.2} km)",
                best.record.applicant(),
                best.distance_km
            ),
            None => println!("  {name}: nothing nearby"),
        }
    }

    Ok(())
}

fn print_ranked(ranked: &[RankedPermit<'_>]) {
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "  {}. {:.3} km  {} - {} [{}]",
            i + 1,
            entry.distance_km,
            entry.record.applicant(),
            entry.record.address(),
            entry.record.status()
        );
    }
    if ranked.is_empty() {
        println!("  (no results)");
    }
}
