//! Relevance re-validation.
//!
//! Second, independent pass over `Incorrect` verdicts: a candidate can score
//! well numerically yet belong to a different product entirely. The checks
//! here demote such false mismatches so the orchestrator can downgrade the
//! verdict to `NotFound`.

use tracing::debug;

use crate::constants::{
    CJK_HEAVY_RATIO, CJK_SIMILARITY_FLOOR, MODEL_SIMILARITY_FLOOR, PRODUCER_SIMILARITY_FLOOR,
};
use crate::normalize::{cjk_part, cjk_ratio};
use crate::scoring::{brands_equivalent, similarity};
use crate::vocab::Vocabulary;

/// Decides whether a matched record plausibly refers to the same product as
/// the original identifier.
///
/// Checks run in order; the first decisive one wins, and a check whose
/// signal is absent is skipped. The CJK-heavy check is terminal when it
/// triggers: identifiers that are mostly ideographs with a model digit carry
/// their meaning in the CJK part, so the remaining checks would only add
/// noise.
pub fn is_relevant(
    original: &str,
    original_producer: &str,
    matched_model: &str,
    matched_producer: &str,
    vocab: &Vocabulary,
) -> bool {
    if let (Some(original_cat), Some(matched_cat)) =
        (vocab.category_of(original), vocab.category_of(matched_model))
    {
        if original_cat != matched_cat {
            debug!(original_cat, matched_cat, "category mismatch");
            return false;
        }
    }

    if is_cjk_heavy_with_digit(original) {
        let original_cjk = cjk_part(original);
        let matched_cjk = cjk_part(matched_model);
        let cjk_similarity = similarity(&original_cjk, &matched_cjk);
        debug!(
            original = %original_cjk,
            matched = %matched_cjk,
            cjk_similarity,
            "CJK-heavy identifier check"
        );
        return cjk_similarity >= CJK_SIMILARITY_FLOOR;
    }

    if let (Some(original_brand), Some(matched_brand)) = (
        listed_brand(original, vocab),
        listed_brand(matched_model, vocab),
    ) {
        if !brands_equivalent(original_brand, matched_brand, vocab) {
            debug!(original_brand, matched_brand, "brand mismatch");
            return false;
        }
    }

    if !original_producer.is_empty() && !matched_producer.is_empty() {
        let producer_similarity = similarity(original_producer, matched_producer);
        if producer_similarity < PRODUCER_SIMILARITY_FLOOR {
            debug!(producer_similarity, "producer mismatch");
            return false;
        }
    }

    let model_similarity = similarity(original, matched_model);
    if model_similarity < MODEL_SIMILARITY_FLOOR {
        debug!(model_similarity, "overall similarity below floor");
        return false;
    }

    true
}

/// Mostly-CJK identifier carrying at least one digit, e.g. `米家无线吸尘器2`.
fn is_cjk_heavy_with_digit(text: &str) -> bool {
    let cleaned: String = text.chars().filter(|c| c.is_alphanumeric()).collect();
    if cleaned.is_empty() {
        return false;
    }
    cleaned.chars().any(|c| c.is_ascii_digit()) && cjk_ratio(&cleaned) > CJK_HEAVY_RATIO
}

/// Brand lookup restricted to the priority list.
///
/// Unlike the scoring extractor this deliberately skips the leading-token
/// heuristics: a speculative brand guess here would veto otherwise valid
/// matches.
fn listed_brand<'v>(text: &str, vocab: &'v Vocabulary) -> Option<&'v str> {
    let lowered = text.to_lowercase();
    vocab
        .priority_brands
        .iter()
        .find(|brand| text.contains(*brand) || lowered.contains(&brand.to_lowercase()))
        .copied()
}
