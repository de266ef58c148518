//! Brand extraction and alias equivalence.

use crate::constants::BRAND_SIMILARITY_THRESHOLD;
use crate::normalize::is_cjk;
use crate::vocab::Vocabulary;

use super::similarity::similarity;

/// Extracts a brand token from a model or producer string.
///
/// Lookup order: priority brand list (containment, case-insensitive), then
/// company-name pattern (CJK run before a legal-entity suffix), then a
/// leading-token heuristic (short CJK prefix, or an uppercase-led word that
/// is not a known model prefix).
pub fn extract_brand(text: &str, vocab: &Vocabulary) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lowered = text.to_lowercase();
    for brand in vocab.priority_brands {
        if text.contains(brand) || lowered.contains(&brand.to_lowercase()) {
            return Some((*brand).to_string());
        }
    }

    if let Some(brand) = company_pattern_brand(text, vocab) {
        return Some(brand);
    }

    leading_token_brand(text, vocab)
}

/// CJK run immediately preceding the earliest company suffix, e.g.
/// `珠海格力电器股份有限公司` → `珠海格力` (run before `电器`).
fn company_pattern_brand(text: &str, vocab: &Vocabulary) -> Option<String> {
    let earliest = vocab
        .company_suffixes
        .iter()
        .filter_map(|suffix| text.find(suffix).map(|pos| (pos, *suffix)))
        .min_by_key(|&(pos, _)| pos)?;

    let (pos, _) = earliest;
    let run: String = text[..pos]
        .chars()
        .rev()
        .take_while(|&c| is_cjk(c))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if run.is_empty() || vocab.generic_words.contains(&run.as_str()) {
        None
    } else {
        Some(run)
    }
}

/// Leading-token heuristic: a 2-4 character CJK prefix, or an uppercase-led
/// ASCII word that is not one of the known model prefixes.
fn leading_token_brand(text: &str, vocab: &Vocabulary) -> Option<String> {
    let cjk_prefix: String = text.chars().take_while(|&c| is_cjk(c)).collect();
    let cjk_len = cjk_prefix.chars().count();
    if (2..=4).contains(&cjk_len) {
        return Some(cjk_prefix);
    }
    if cjk_len > 0 {
        return None;
    }

    let mut chars = text.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    let mut word = String::from(first);
    word.extend(chars.take_while(|c| c.is_ascii_alphabetic()));

    if word.chars().count() < 2 || vocab.model_prefixes.contains(&word.as_str()) {
        None
    } else {
        Some(word)
    }
}

/// True when two brand tokens name the same manufacturer.
///
/// Checks, in order: case-insensitive equality, shared alias group,
/// containment either way, and a high similarity ratio for spelling
/// variants.
pub fn brands_equivalent(a: &str, b: &str, vocab: &Vocabulary) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    if a_lower == b_lower {
        return true;
    }

    if let (Some(ca), Some(cb)) = (vocab.canonical_brand(a), vocab.canonical_brand(b)) {
        if ca == cb {
            return true;
        }
    }

    if a_lower.contains(&b_lower) || b_lower.contains(&a_lower) {
        return true;
    }

    similarity(a, b) > BRAND_SIMILARITY_THRESHOLD
}
