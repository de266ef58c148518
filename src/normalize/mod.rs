//! Identifier normalization.
//!
//! Turns a raw, free-text product identifier (often brand-prefixed and
//! wrapped in locale-specific decoration) into the canonical token used to
//! query the registry. Total: never fails, empty in → empty out.


use crate::vocab::Vocabulary;

/// True for characters in the CJK unified ideograph block.
#[inline]
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Concatenation of all CJK characters in `text`.
pub fn cjk_part(text: &str) -> String {
    text.chars().filter(|&c| is_cjk(c)).collect()
}

/// Fraction of CJK characters among all characters, 0.0 for empty input.
pub fn cjk_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let cjk = text.chars().filter(|&c| is_cjk(c)).count();
    cjk as f64 / total as f64
}

/// Normalizes a raw identifier into the canonical search token.
///
/// Rules apply in priority order, first match wins:
/// 1. version-suffixed identifiers keep the suffix and lose only a brand
///    prefix,
/// 2. compound brand+category prefixes are stripped,
/// 3. plain brand prefixes are stripped,
/// 4. known non-brand model prefixes pass through verbatim,
/// 5. otherwise leading and trailing CJK runs are discarded.
pub fn normalize(raw: &str, vocab: &Vocabulary) -> String {
    let model = raw.trim();
    if model.is_empty() {
        return String::new();
    }

    if vocab.has_version_suffix(model) {
        return strip_brand_prefix(model, vocab).trim().to_string();
    }

    for compound in vocab.compound_prefixes {
        if let Some(rest) = model.strip_prefix(compound) {
            return rest.trim().to_string();
        }
    }

    for brand in vocab.strip_brands {
        if let Some(rest) = model.strip_prefix(brand) {
            return rest.trim().to_string();
        }
    }

    if vocab
        .model_prefixes
        .iter()
        .any(|prefix| model.starts_with(prefix))
    {
        return model.to_string();
    }

    trim_cjk_runs(model).trim().to_string()
}

/// Strips a recognized brand prefix (compounds before plain brands),
/// leaving the rest of the identifier intact.
fn strip_brand_prefix<'a>(model: &'a str, vocab: &Vocabulary) -> &'a str {
    for compound in vocab.compound_prefixes {
        if let Some(rest) = model.strip_prefix(compound) {
            return rest;
        }
    }
    for brand in vocab.strip_brands {
        if let Some(rest) = model.strip_prefix(brand) {
            return rest;
        }
    }
    model
}

/// Removes the leading and trailing runs of CJK characters.
///
/// Entirely-CJK input comes back unchanged: neither scan finds a boundary.
fn trim_cjk_runs(model: &str) -> &str {
    let start = match model.char_indices().find(|&(_, c)| !is_cjk(c)) {
        Some((idx, _)) => idx,
        None => return model,
    };

    let end = match model.char_indices().rev().find(|&(_, c)| !is_cjk(c)) {
        Some((idx, c)) => idx + c.len_utf8(),
        None => return model,
    };

    &model[start..end]
}
