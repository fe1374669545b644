//! Curated offline metro universe.
//!
//! A snapshot of the largest US metros (2023 ACS estimates, rounded) with
//! pre-resolved rail and shared-mobility flags, so the pipeline always runs
//! without an upstream acquisition step. Agency and system name lists are
//! only populated by the live merges and stay empty here.

use crate::models::{MetroArea, Region};

type BuiltinRow = (&'static str, &'static str, u64, &'static str, Region, bool, bool);

#[rustfmt::skip]
const BUILTIN_METROS: &[BuiltinRow] = &[
    ("35620", "New York-Newark-Jersey City, NY-NJ-PA", 19_498_000, "NY", Region::Northeast, true, true),
    ("31080", "Los Angeles-Long Beach-Anaheim, CA", 12_872_000, "CA", Region::West, true, true),
    ("16980", "Chicago-Naperville-Elgin, IL-IN-WI", 9_262_000, "IL", Region::Midwest, true, true),
    ("19100", "Dallas-Fort Worth-Arlington, TX", 8_100_000, "TX", Region::South, true, true),
    ("26420", "Houston-The Woodlands-Sugar Land, TX", 7_340_000, "TX", Region::South, true, true),
    ("47900", "Washington-Arlington-Alexandria, DC-VA-MD-WV", 6_356_000, "DC", Region::South, true, true),
    ("37980", "Philadelphia-Camden-Wilmington, PA-NJ-DE-MD", 6_246_000, "PA", Region::Northeast, true, true),
    ("12060", "Atlanta-Sandy Springs-Alpharetta, GA", 6_245_000, "GA", Region::South, true, true),
    ("33100", "Miami-Fort Lauderdale-Pompano Beach, FL", 6_183_000, "FL", Region::South, true, true),
    ("38060", "Phoenix-Mesa-Chandler, AZ", 5_070_000, "AZ", Region::West, true, true),
    ("14460", "Boston-Cambridge-Newton, MA-NH", 4_941_000, "MA", Region::Northeast, true, true),
    ("40140", "Riverside-San Bernardino-Ontario, CA", 4_688_000, "CA", Region::West, true, true),
    ("41860", "San Francisco-Oakland-Berkeley, CA", 4_566_000, "CA", Region::West, true, true),
    ("19820", "Detroit-Warren-Dearborn, MI", 4_340_000, "MI", Region::Midwest, true, true),
    ("42660", "Seattle-Tacoma-Bellevue, WA", 4_034_000, "WA", Region::West, true, true),
    ("33460", "Minneapolis-St. Paul-Bloomington, MN-WI", 3_712_000, "MN", Region::Midwest, true, true),
    ("45300", "Tampa-St. Petersburg-Clearwater, FL", 3_342_000, "FL", Region::South, true, true),
    ("41740", "San Diego-Chula Vista-Carlsbad, CA", 3_276_000, "CA", Region::West, true, true),
    ("19740", "Denver-Aurora-Lakewood, CO", 2_986_000, "CO", Region::West, true, true),
    ("12580", "Baltimore-Columbia-Towson, MD", 2_834_000, "MD", Region::South, true, true),
    ("36740", "Orlando-Kissimmee-Sanford, FL", 2_817_000, "FL", Region::South, true, true),
    ("41180", "St. Louis, MO-IL", 2_797_000, "MO", Region::Midwest, true, true),
    ("16740", "Charlotte-Concord-Gastonia, NC-SC", 2_760_000, "NC", Region::South, true, true),
    ("41700", "San Antonio-New Braunfels, TX", 2_600_000, "TX", Region::South, false, true),
    ("38900", "Portland-Vancouver-Hillsboro, OR-WA", 2_510_000, "OR", Region::West, true, true),
    ("12420", "Austin-Round Rock-Georgetown, TX", 2_470_000, "TX", Region::South, true, true),
    ("40900", "Sacramento-Roseville-Folsom, CA", 2_420_000, "CA", Region::West, true, true),
    ("38300", "Pittsburgh, PA", 2_343_000, "PA", Region::Northeast, true, true),
    ("29820", "Las Vegas-Henderson-Paradise, NV", 2_330_000, "NV", Region::West, false, true),
    ("28140", "Kansas City, MO-KS", 2_210_000, "MO", Region::Midwest, true, true),
    ("18140", "Columbus, OH", 2_180_000, "OH", Region::Midwest, false, true),
    ("26900", "Indianapolis-Carmel-Anderson, IN", 2_140_000, "IN", Region::Midwest, false, true),
    ("34980", "Nashville-Davidson-Murfreesboro-Franklin, TN", 2_100_000, "TN", Region::South, true, true),
    ("17460", "Cleveland-Elyria, OH", 2_058_000, "OH", Region::Midwest, true, true),
    ("47260", "Virginia Beach-Norfolk-Newport News, VA-NC", 1_800_000, "VA", Region::South, true, true),
    ("27260", "Jacksonville, FL", 1_710_000, "FL", Region::South, true, true),
    ("39300", "Providence-Warwick, RI-MA", 1_680_000, "RI", Region::Northeast, true, true),
    ("33340", "Milwaukee-Waukesha, WI", 1_560_000, "WI", Region::Midwest, false, true),
    ("39580", "Raleigh-Cary, NC", 1_510_000, "NC", Region::South, false, true),
    ("36420", "Oklahoma City, OK", 1_480_000, "OK", Region::South, false, true),
    ("31140", "Louisville/Jefferson County, KY-IN", 1_360_000, "KY", Region::South, false, true),
    ("40060", "Richmond, VA", 1_350_000, "VA", Region::South, false, true),
    ("32820", "Memphis, TN-MS-AR", 1_330_000, "TN", Region::South, true, true),
    ("41620", "Salt Lake City, UT", 1_270_000, "UT", Region::West, true, true),
    ("35380", "New Orleans-Metairie, LA", 1_240_000, "LA", Region::South, true, true),
    ("25540", "Hartford-East Hartford-Middletown, CT", 1_210_000, "CT", Region::Northeast, true, true),
    ("23420", "Fresno, CA", 1_180_000, "CA", Region::West, false, true),
    ("24340", "Grand Rapids-Kentwood, MI", 1_160_000, "MI", Region::Midwest, false, true),
    ("15380", "Buffalo-Cheektowaga, NY", 1_160_000, "NY", Region::Northeast, true, true),
    ("13820", "Birmingham-Hoover, AL", 1_110_000, "AL", Region::South, false, true),
    ("40380", "Rochester, NY", 1_080_000, "NY", Region::Northeast, false, true),
    ("46060", "Tucson, AZ", 1_060_000, "AZ", Region::West, true, true),
    ("46140", "Tulsa, OK", 1_040_000, "OK", Region::South, false, true),
    ("46520", "Urban Honolulu, HI", 1_000_000, "HI", Region::West, true, true),
    ("36540", "Omaha-Council Bluffs, NE-IA", 1_000_000, "NE", Region::Midwest, false, true),
    ("10740", "Albuquerque, NM", 920_000, "NM", Region::West, true, true),
    ("12540", "Bakersfield, CA", 910_000, "CA", Region::West, false, false),
    ("28940", "Knoxville, TN", 910_000, "TN", Region::South, false, true),
    ("10580", "Albany-Schenectady-Troy, NY", 900_000, "NY", Region::Northeast, false, true),
    ("32580", "McAllen-Edinburg-Mission, TX", 890_000, "TX", Region::South, false, false),
    ("21340", "El Paso, TX", 870_000, "TX", Region::South, false, true),
    ("12940", "Baton Rouge, LA", 870_000, "LA", Region::South, false, true),
    ("14260", "Boise City, ID", 800_000, "ID", Region::West, false, true),
    ("19780", "Des Moines-West Des Moines, IA", 720_000, "IA", Region::Midwest, false, true),
    ("39340", "Provo-Orem, UT", 720_000, "UT", Region::West, true, true),
    ("31540", "Madison, WI", 690_000, "WI", Region::Midwest, false, true),
    ("45060", "Syracuse, NY", 660_000, "NY", Region::Northeast, false, true),
    ("20500", "Durham-Chapel Hill, NC", 660_000, "NC", Region::South, false, true),
    ("44060", "Spokane-Spokane Valley, WA", 600_000, "WA", Region::West, false, true),
    ("45780", "Toledo, OH", 600_000, "OH", Region::Midwest, false, false),
    ("16860", "Chattanooga, TN-GA", 580_000, "TN", Region::South, false, true),
    ("42540", "Scranton-Wilkes-Barre, PA", 570_000, "PA", Region::Northeast, false, false),
    ("22220", "Fayetteville-Springdale-Rogers, AR", 560_000, "AR", Region::South, false, true),
    ("38860", "Portland-South Portland, ME", 560_000, "ME", Region::Northeast, false, true),
    ("39900", "Reno, NV", 490_000, "NV", Region::West, false, true),
    ("11700", "Asheville, NC", 480_000, "NC", Region::South, false, false),
    ("42340", "Savannah, GA", 420_000, "GA", Region::South, false, true),
    ("21660", "Eugene-Springfield, OR", 380_000, "OR", Region::West, false, true),
    ("22660", "Fort Collins, CO", 370_000, "CO", Region::West, false, true),
    ("24580", "Green Bay, WI", 330_000, "WI", Region::Midwest, false, false),
    ("15540", "Burlington-South Burlington, VT", 230_000, "VT", Region::Northeast, false, true),
    ("16620", "Charleston, WV", 200_000, "WV", Region::South, false, false),
    ("42140", "Santa Fe, NM", 160_000, "NM", Region::West, true, true),
    ("14020", "Bloomington, IN", 160_000, "IN", Region::Midwest, false, true),
];

/// The built-in metro universe, largest first
#[must_use]
pub fn builtin_universe() -> Vec<MetroArea> {
    BUILTIN_METROS
        .iter()
        .map(|&(code, name, population, state, region, has_rail, has_sm)| {
            MetroArea::new(code, name, population, state, region)
                .with_rail(has_rail)
                .with_shared_mobility(has_sm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn builtin_codes_are_unique() {
        let universe = builtin_universe();
        let codes: FxHashSet<&str> = universe.iter().map(|m| m.cbsa_code.as_str()).collect();
        assert_eq!(codes.len(), universe.len());
    }

    #[test]
    fn builtin_universe_supports_default_config() {
        let universe = builtin_universe();
        let config = crate::SamplingConfig::default();
        assert!(universe.len() >= config.max_sample_size);
    }

    #[test]
    fn builtin_regions_match_states() {
        for metro in builtin_universe() {
            assert_eq!(
                crate::models::Region::from_state(&metro.state_abbr),
                Some(metro.region),
                "{}",
                metro.cbsa_code
            );
        }
    }
}
