//! Cross-cutting, shared constants.
//!
//! Score weights mirror the tuned values for the registry's closed category
//! set. Prefer deriving secondary values from primary ones to avoid drift.

/// Score for a candidate model identical to the raw input identifier.
pub const SCORE_EXACT_ORIGINAL: f64 = 100.0;

/// Score for a candidate model identical to the canonical search token.
pub const SCORE_EXACT_CANONICAL: f64 = 95.0;

/// Weight applied to the best similarity ratio (`[0,1]` → up to 90 points).
pub const SIMILARITY_WEIGHT: f64 = 90.0;

/// Containment bonus against the raw identifier.
pub const BONUS_CONTAINS_ORIGINAL: f64 = 10.0;

/// Containment bonus against the canonical token.
pub const BONUS_CONTAINS_CANONICAL: f64 = 8.0;

/// Brand bonus for an alias-equivalent tier-one brand.
pub const BONUS_BRAND_TIER_ONE: f64 = 20.0;

/// Brand bonus for an alias-equivalent tier-two brand.
pub const BONUS_BRAND_TIER_TWO: f64 = 18.0;

/// Brand bonus for exact brand string equality (any tier).
pub const BONUS_BRAND_EXACT: f64 = 15.0;

/// Brand bonus for alias-equivalent brands outside the priority tiers.
pub const BONUS_BRAND_ALIAS: f64 = 12.0;

/// Bonus when only the candidate side resolves a brand.
pub const BONUS_BRAND_CANDIDATE_ONLY: f64 = 3.0;

/// Bonus when both sides carry the series marker token.
pub const BONUS_SERIES_MARKER: f64 = 8.0;

/// Bonus for an equal extracted power spec.
pub const BONUS_POWER_SPEC: f64 = 12.0;

/// Completeness bonus for a non-empty candidate grade.
pub const BONUS_HAS_GRADE: f64 = 2.0;

/// Completeness bonus for a non-empty producer field.
pub const BONUS_HAS_PRODUCER: f64 = 2.0;

/// Completeness bonus for a non-empty registration number.
pub const BONUS_HAS_REGISTRATION: f64 = 1.0;

/// Upper bound on any match score.
pub const SCORE_MAX: f64 = 100.0;

/// Top scores below this are returned but annotated as low-confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 30.0;

/// Brand similarity above this counts as the same manufacturer.
pub const BRAND_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Producer similarity below this fails the relevance producer check.
pub const PRODUCER_SIMILARITY_FLOOR: f64 = 0.3;

/// CJK-substring similarity below this fails the CJK-heavy relevance check.
pub const CJK_SIMILARITY_FLOOR: f64 = 0.3;

/// Overall model similarity below this fails the relevance floor check.
pub const MODEL_SIMILARITY_FLOOR: f64 = 0.2;

/// An identifier with a CJK character ratio above this is "CJK-heavy".
pub const CJK_HEAVY_RATIO: f64 = 0.5;

/// Default number of pool workers.
pub const DEFAULT_WORKERS: usize = 3;

/// Default minimum interval between one worker's registry calls, in seconds.
pub const DEFAULT_MIN_INTERVAL_SECS: f64 = 2.0;

/// Default registry search page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Approximate aggregate registry call rate for a worker/interval pair.
///
/// The rate limiter is per-worker, so the pool as a whole issues roughly
/// `workers / interval` calls per second.
pub fn aggregate_rate(workers: usize, min_interval_secs: f64) -> f64 {
    if min_interval_secs <= 0.0 {
        f64::INFINITY
    } else {
        workers as f64 / min_interval_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_rate() {
        assert!((aggregate_rate(3, 2.0) - 1.5).abs() < f64::EPSILON);
        assert!(aggregate_rate(4, 0.0).is_infinite());
    }

    #[test]
    fn test_accumulation_can_reach_cap() {
        // The accumulation path must be able to reach the cap without the
        // exact-match short circuits.
        let max_accumulated = SIMILARITY_WEIGHT
            + BONUS_CONTAINS_ORIGINAL
            + BONUS_CONTAINS_CANONICAL
            + BONUS_BRAND_TIER_ONE
            + BONUS_SERIES_MARKER
            + BONUS_POWER_SPEC
            + BONUS_HAS_GRADE
            + BONUS_HAS_PRODUCER
            + BONUS_HAS_REGISTRATION;
        assert!(max_accumulated > SCORE_MAX);
    }
}
