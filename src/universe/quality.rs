//! Data-quality checks on the universe table.
//!
//! Run before sampling; issues are surfaced as warnings and never abort the
//! pipeline.

use rustc_hash::FxHashSet;

use crate::models::MetroArea;

/// Inspect the universe and describe any quality issues found
#[must_use]
pub fn quality_issues(universe: &[MetroArea]) -> Vec<String> {
    let mut issues = Vec::new();

    if universe.is_empty() {
        issues.push("Universe is empty".to_string());
        return issues;
    }

    let mut seen = FxHashSet::default();
    let duplicates = universe
        .iter()
        .filter(|m| !seen.insert(m.cbsa_code.as_str()))
        .count();
    if duplicates > 0 {
        issues.push(format!("{duplicates} duplicate CBSA codes"));
    }

    let zero_population = universe.iter().filter(|m| m.population == 0).count();
    if zero_population > 0 {
        issues.push(format!("{zero_population} metros with zero population"));
    }

    let unmatched = universe.iter().filter(|m| m.agencies.is_empty()).count();
    if unmatched * 2 > universe.len() {
        issues.push("More than 50% of metros have no matched transit agencies".to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn clean_universe_reports_no_issues() {
        let universe: Vec<MetroArea> = (0..4)
            .map(|i| {
                MetroArea::new(format!("1000{i}"), format!("Metro {i}, TX"), 600_000, "TX", Region::South)
                    .with_agencies(vec![format!("Agency {i}")])
            })
            .collect();
        assert!(quality_issues(&universe).is_empty());
    }

    #[test]
    fn duplicates_and_zero_population_are_reported() {
        let universe = vec![
            MetroArea::new("10001", "A, TX", 600_000, "TX", Region::South)
                .with_agencies(vec!["Agency".to_string()]),
            MetroArea::new("10001", "A again, TX", 600_000, "TX", Region::South)
                .with_agencies(vec!["Agency".to_string()]),
            MetroArea::new("10002", "B, TX", 0, "TX", Region::South)
                .with_agencies(vec!["Agency".to_string()]),
        ];

        let issues = quality_issues(&universe);
        assert!(issues.iter().any(|i| i.contains("duplicate")));
        assert!(issues.iter().any(|i| i.contains("zero population")));
    }

    #[test]
    fn majority_unmatched_agencies_is_reported() {
        let universe = vec![
            MetroArea::new("10001", "A, TX", 600_000, "TX", Region::South),
            MetroArea::new("10002", "B, TX", 700_000, "TX", Region::South),
            MetroArea::new("10003", "C, TX", 800_000, "TX", Region::South)
                .with_agencies(vec!["Agency".to_string()]),
        ];

        let issues = quality_issues(&universe);
        assert!(issues.iter().any(|i| i.contains("no matched transit agencies")));
    }
}
