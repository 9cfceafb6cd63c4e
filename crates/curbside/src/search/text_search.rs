use super::StatusFilter;
use crate::record::PermitRecord;

/// Records whose applicant contains `name`, ignoring case, then narrowed by `status`.
///
/// Catalog order is preserved. `name` is expected to be validated already.
pub fn applicant_search_inner<'a>(
    records: &'a [PermitRecord],
    name: &str,
    status: &StatusFilter,
) -> Vec<&'a PermitRecord> {
    let needle = name.to_lowercase();
    records
        .iter()
        .filter(|record| record.applicant_key().contains(&needle))
        .filter(|record| status.matches(record))
        .collect()
}

/// Records whose address contains `address`, ignoring case.
///
/// With no address every record is returned, in catalog order.
pub fn address_search_inner<'a>(
    records: &'a [PermitRecord],
    address: Option<&str>,
) -> Vec<&'a PermitRecord> {
    match address {
        None => records.iter().collect(),
        Some(address) => {
            let needle = address.to_lowercase();
            records
                .iter()
                .filter(|record| record.address_key().contains(&needle))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Coordinate;

    fn records() -> Vec<PermitRecord> {
        vec![
            PermitRecord::new(
                "Joe's Tacos",
                "100 Main St",
                "APPROVED",
                Coordinate::new(37.77, -122.42),
            ),
            PermitRecord::new(
                "Best Burgers",
                "200 Main St",
                "REQUESTED",
                Coordinate::new(37.78, -122.41),
            ),
            PermitRecord::new("Joe's Burgers", "5 FOLSOM ST", "EXPIRED", None),
        ]
    }

    fn applicants(found: &[&PermitRecord]) -> Vec<String> {
        found.iter().map(|r| r.applicant().to_string()).collect()
    }

    #[test]
    fn test_applicant_substring_case_insensitive() {
        let records = records();
        for name in ["joe", "JOE", "Joe", "oe's"] {
            let found = applicant_search_inner(&records, name, &StatusFilter::Any);
            assert_eq!(
                applicants(&found),
                vec!["Joe's Tacos", "Joe's Burgers"],
                "query {name:?}"
            );
        }
    }

    #[test]
    fn test_applicant_status_filter_is_exact() {
        let records = records();
        let found = applicant_search_inner(&records, "burgers", &StatusFilter::exact("requested"));
        assert_eq!(applicants(&found), vec!["Best Burgers"]);

        let found = applicant_search_inner(&records, "burgers", &StatusFilter::exact("request"));
        assert!(found.is_empty(), "status must match exactly, not by substring");
    }

    #[test]
    fn test_applicant_no_match_is_empty() {
        let records = records();
        assert!(applicant_search_inner(&records, "pizza", &StatusFilter::Any).is_empty());
    }

    #[test]
    fn test_address_none_returns_everything_in_order() {
        let records = records();
        let found = address_search_inner(&records, None);
        assert_eq!(found.len(), records.len());
        assert!(found.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_address_substring_case_insensitive() {
        let records = records();
        let found = address_search_inner(&records, Some("main"));
        assert_eq!(applicants(&found), vec!["Joe's Tacos", "Best Burgers"]);

        let found = address_search_inner(&records, Some("folsom"));
        assert_eq!(applicants(&found), vec!["Joe's Burgers"]);
    }

    fn smith_and_tacos() -> Vec<PermitRecord> {
        vec![
            PermitRecord::new("Joe's Tacos", "100 Main St", "APPROVED", None),
            PermitRecord::new("Joe Smith Grill", "5 Castro Ave", "APPROVED", None),
        ]
    }

    #[test]
    fn test_applicant_needle_keeps_surrounding_whitespace() {
        let records = smith_and_tacos();
        let found = applicant_search_inner(&records, "joe ", &StatusFilter::Any);
        assert_eq!(applicants(&found), vec!["Joe Smith Grill"]);

        let found = applicant_search_inner(&records, "joe", &StatusFilter::Any);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_address_needle_keeps_surrounding_whitespace() {
        let records = smith_and_tacos();
        let found = address_search_inner(&records, Some(" st"));
        assert_eq!(applicants(&found), vec!["Joe's Tacos"]);

        let found = address_search_inner(&records, Some("st"));
        assert_eq!(found.len(), 2);
    }
}
