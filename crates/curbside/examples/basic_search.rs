//! Basic permit search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Creating a searcher over a synthetic permit catalog
//! - Applicant name search, with and without a status filter
//! - Address search, including the "everything" case
//! - Handling validation errors

use curbside::{PermitRecord, PermitSearcher, TestDataConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Synthetic San Francisco permits (no downloads needed)
    let searcher = PermitSearcher::from_test_data(TestDataConfig::sample())?;
    println!("{}\n", searcher.summary());

    // Case-insensitive substring match on the applicant
    println!("Applicants matching 'catering':");
    let results = searcher.search_by_applicant(Some("catering"), None)?;
    print_permits(&results, 3);

    // Same search restricted to approved permits
    println!("\nApproved applicants matching 'catering':");
    let results = searcher.search_by_applicant(Some("catering"), Some("approved"))?;
    print_permits(&results, 3);

    // Address search has no status filter
    println!("\nPermits on Folsom St:");
    let results = searcher.search_by_address(Some("folsom st"));
    print_permits(&results, 5);

    // No address means the whole catalog
    println!("\nAll permits:");
    let results = searcher.search_by_address(None);
    print_permits(&results, 2);

    // A missing name is a validation error with a stable reason code
    match searcher.search_by_applicant(None, None) {
        Ok(_) => println!("\nUnexpectedly accepted a missing name"),
        Err(err) => println!("\nRejected: {} ({})", err, err.reason()),
    }

    Ok(())
}

fn print_permits(results: &[&PermitRecord], limit: usize) {
    for (i, permit) in results.iter().take(limit).enumerate() {
        println!(
            "  {}. {} - {} [{}]",
            i + 1,
            permit.applicant(),
            permit.address(),
            permit.status()
        );
    }

    if results.len() > limit {
        println!("  ... and {} more results", results.len() - limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = curbside::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_basic_search_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Basic search example should run successfully"
        );
    }
}
