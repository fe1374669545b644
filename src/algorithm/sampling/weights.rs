//! Sample weight calculation.
//!
//! Weights make the sample represent the full universe when aggregating
//! statistics. Certainty selections (mandatory, coverage boost) carry weight
//! 1.0; each stratified draw represents `N_stratum / n_stratum` metros of
//! its stratum, with `N` counted over the whole universe (mandatory members
//! included) and `n` the stratified draws from that stratum.

use std::collections::BTreeMap;

use crate::algorithm::sampling::types::{SelectionMethod, SelectionRecord};
use crate::algorithm::stratify::StratumKey;
use crate::error::{Result, SamplerError};

/// Finalize the weight of every record in place.
///
/// `stratum_sizes` must hold the universe-wide member count of every stratum
/// that appears in `records`.
pub(crate) fn assign_weights(
    records: &mut [SelectionRecord<'_>],
    stratum_sizes: &BTreeMap<StratumKey, usize>,
) -> Result<()> {
    let mut draws_per_stratum: BTreeMap<StratumKey, usize> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.method == SelectionMethod::StratifiedRandom)
    {
        *draws_per_stratum.entry(record.stratum).or_default() += 1;
    }

    for record in records.iter_mut() {
        record.sample_weight = match record.method {
            SelectionMethod::Mandatory | SelectionMethod::CoverageBoost => 1.0,
            SelectionMethod::StratifiedRandom => {
                let universe_count = stratum_sizes.get(&record.stratum).copied().unwrap_or(0);
                let draws = draws_per_stratum.get(&record.stratum).copied().unwrap_or(0);
                if universe_count == 0 || draws == 0 {
                    // Unreachable by construction; a stratified record implies
                    // at least one draw and one universe member.
                    return Err(SamplerError::WeightError(format!(
                        "stratum {} has {universe_count} members and {draws} draws",
                        record.stratum
                    )));
                }
                universe_count as f64 / draws as f64
            }
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::stratify::assign_stratum;
    use crate::models::{MetroArea, Region};

    fn record<'a>(metro: &'a MetroArea, method: SelectionMethod) -> SelectionRecord<'a> {
        SelectionRecord {
            metro,
            stratum: assign_stratum(metro),
            method,
            sample_weight: 0.0,
        }
    }

    #[test]
    fn certainty_selections_get_unit_weight() {
        let big = MetroArea::new("20010", "Big, NY", 9_000_000, "NY", Region::Northeast);
        let boost = MetroArea::new("20020", "Boost, TX", 4_000_000, "TX", Region::South);

        let mut sizes = BTreeMap::new();
        sizes.insert(assign_stratum(&big), 1);
        sizes.insert(assign_stratum(&boost), 7);

        let mut records = vec![
            record(&big, SelectionMethod::Mandatory),
            record(&boost, SelectionMethod::CoverageBoost),
        ];
        assign_weights(&mut records, &sizes).unwrap();

        assert!((records[0].sample_weight - 1.0).abs() < f64::EPSILON);
        assert!((records[1].sample_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stratified_weight_is_stratum_ratio() {
        // Two draws from a stratum of nine universe members.
        let a = MetroArea::new("20030", "A, OH", 600_000, "OH", Region::Midwest);
        let b = MetroArea::new("20040", "B, IN", 700_000, "IN", Region::Midwest);
        assert_eq!(assign_stratum(&a), assign_stratum(&b));

        let mut sizes = BTreeMap::new();
        sizes.insert(assign_stratum(&a), 9);

        let mut records = vec![
            record(&a, SelectionMethod::StratifiedRandom),
            record(&b, SelectionMethod::StratifiedRandom),
        ];
        assign_weights(&mut records, &sizes).unwrap();

        for r in &records {
            assert!((r.sample_weight - 4.5).abs() < 1e-12);
            // weight * n_stratum recovers N_stratum exactly.
            assert!((r.sample_weight * 2.0 - 9.0).abs() < 1e-12);
        }
    }

    #[test]
    fn missing_stratum_size_is_a_weight_error() {
        let a = MetroArea::new("20050", "A, OR", 600_000, "OR", Region::West);
        let mut records = vec![record(&a, SelectionMethod::StratifiedRandom)];

        let result = assign_weights(&mut records, &BTreeMap::new());
        assert!(matches!(result, Err(SamplerError::WeightError(_))));
    }
}
