//! Multi-factor candidate scoring and ranking.
//!
//! Combines exact-match short circuits with similarity, containment, brand,
//! series, power-spec, and completeness signals into a bounded `[0,100]`
//! score. The weights live in [`crate::constants`], the vocabularies in
//! [`crate::vocab`].

pub mod brand;
pub mod similarity;


pub use brand::{brands_equivalent, extract_brand};
pub use similarity::similarity;

use tracing::debug;

use crate::candidate::CandidateRecord;
use crate::constants::{
    BONUS_BRAND_ALIAS, BONUS_BRAND_CANDIDATE_ONLY, BONUS_BRAND_EXACT, BONUS_BRAND_TIER_ONE,
    BONUS_BRAND_TIER_TWO, BONUS_CONTAINS_CANONICAL, BONUS_CONTAINS_ORIGINAL, BONUS_HAS_GRADE,
    BONUS_HAS_PRODUCER, BONUS_HAS_REGISTRATION, BONUS_POWER_SPEC, BONUS_SERIES_MARKER,
    LOW_CONFIDENCE_THRESHOLD, SCORE_EXACT_CANONICAL, SCORE_EXACT_ORIGINAL, SCORE_MAX,
    SIMILARITY_WEIGHT,
};
use crate::vocab::{BrandTier, Vocabulary};

/// A candidate together with its compatibility score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: CandidateRecord,
    pub score: f64,
}

/// The top-ranked candidate for a query.
#[derive(Debug, Clone)]
pub struct BestMatch {
    pub candidate: CandidateRecord,
    pub score: f64,
    /// Set when the top score falls below the confidence threshold; the
    /// match is still returned, only annotated.
    pub low_confidence: bool,
}

/// Scores one candidate against the original identifier and its canonical
/// search token. Bounded to `[0, 100]`.
pub fn score_candidate(
    original: &str,
    canonical: &str,
    candidate: &CandidateRecord,
    vocab: &Vocabulary,
) -> f64 {
    if candidate.model == original {
        return SCORE_EXACT_ORIGINAL;
    }
    if candidate.model == canonical {
        return SCORE_EXACT_CANONICAL;
    }

    let mut score = 0.0;

    let sim_original = similarity(original, &candidate.model);
    let sim_canonical = similarity(canonical, &candidate.model);
    score += sim_original.max(sim_canonical) * SIMILARITY_WEIGHT;

    if contains_either(&candidate.model, original) {
        score += BONUS_CONTAINS_ORIGINAL;
    }
    if contains_either(&candidate.model, canonical) {
        score += BONUS_CONTAINS_CANONICAL;
    }

    score += brand_bonus(original, candidate, vocab);

    if vocab.shares_series_marker(original, &candidate.model) {
        score += BONUS_SERIES_MARKER;
    }

    if let (Some(a), Some(b)) = (
        extract_power_spec(original),
        extract_power_spec(&candidate.model),
    ) {
        if a == b {
            score += BONUS_POWER_SPEC;
        }
    }

    if !candidate.grade_raw.trim().is_empty() {
        score += BONUS_HAS_GRADE;
    }
    if !candidate.producer.trim().is_empty() {
        score += BONUS_HAS_PRODUCER;
    }
    if !candidate.registration_number.trim().is_empty() {
        score += BONUS_HAS_REGISTRATION;
    }

    score.min(SCORE_MAX)
}

fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Brand compatibility bonus.
///
/// The candidate brand prefers the producer field over the model string; the
/// bonus is tiered by the original side's brand priority.
fn brand_bonus(original: &str, candidate: &CandidateRecord, vocab: &Vocabulary) -> f64 {
    let original_brand = extract_brand(original, vocab);
    let candidate_brand = extract_brand(&candidate.producer, vocab)
        .or_else(|| extract_brand(&candidate.model, vocab));

    match (original_brand, candidate_brand) {
        (Some(ob), Some(cb)) => {
            let equivalent = brands_equivalent(&ob, &cb, vocab);
            match vocab.brand_tier(&ob) {
                Some(BrandTier::One) if equivalent => BONUS_BRAND_TIER_ONE,
                Some(BrandTier::Two) if equivalent => BONUS_BRAND_TIER_TWO,
                _ if ob == cb => BONUS_BRAND_EXACT,
                _ if equivalent => BONUS_BRAND_ALIAS,
                _ => 0.0,
            }
        }
        (None, Some(_)) => BONUS_BRAND_CANDIDATE_ONLY,
        _ => 0.0,
    }
}

/// Extracts a numeric power/capacity spec from a model string.
///
/// Matches, in order of preference: `KF[R]-<digits>GW`, `<digits>GW`,
/// `KF[R]-<digits>`. Case-insensitive.
pub fn extract_power_spec(model: &str) -> Option<String> {
    let upper = model.to_uppercase();

    kf_prefixed_digits(&upper, true)
        .or_else(|| digits_before_gw(&upper))
        .or_else(|| kf_prefixed_digits(&upper, false))
}

/// Digits following `KF-` or `KFR-`, optionally requiring a trailing `GW`.
fn kf_prefixed_digits(upper: &str, require_gw: bool) -> Option<String> {
    let bytes = upper.as_bytes();
    let mut from = 0;

    while let Some(found) = upper[from..].find("KF") {
        let start = from + found;
        let mut i = start + 2;
        if bytes.get(i) == Some(&b'R') {
            i += 1;
        }
        if bytes.get(i) == Some(&b'-') {
            i += 1;
            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i > digits_start && (!require_gw || upper[i..].starts_with("GW")) {
                return Some(upper[digits_start..i].to_string());
            }
        }
        from = start + 2;
    }

    None
}

/// Digits immediately preceding the first `GW` occurrence.
fn digits_before_gw(upper: &str) -> Option<String> {
    let bytes = upper.as_bytes();
    let mut from = 0;

    while let Some(found) = upper[from..].find("GW") {
        let pos = from + found;
        let mut start = pos;
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start < pos {
            return Some(upper[start..pos].to_string());
        }
        from = pos + 2;
    }

    None
}

/// Scores and ranks candidates, best first.
///
/// The sort is stable: ties keep discovery order.
pub fn rank(
    original: &str,
    canonical: &str,
    candidates: Vec<CandidateRecord>,
    vocab: &Vocabulary,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = score_candidate(original, canonical, &candidate, vocab);
            ScoredCandidate { candidate, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Picks the best-scoring candidate, annotating low-confidence results.
pub fn best_match(
    original: &str,
    canonical: &str,
    candidates: Vec<CandidateRecord>,
    vocab: &Vocabulary,
) -> Option<BestMatch> {
    if candidates.is_empty() {
        return None;
    }

    let ranked = rank(original, canonical, candidates, vocab);
    let top = ranked.into_iter().next()?;

    let low_confidence = top.score < LOW_CONFIDENCE_THRESHOLD;
    if low_confidence {
        debug!(
            original,
            model = %top.candidate.model,
            score = top.score,
            "best match below confidence threshold"
        );
    }

    Some(BestMatch {
        candidate: top.candidate,
        score: top.score,
        low_confidence,
    })
}
