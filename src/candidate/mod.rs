//! Candidate records: grade normalization and deduplication.


use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::normalize::is_cjk;
use crate::registry::RawRecord;

/// Canonical energy-efficiency grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Grade {
    /// Display form used in `detail` strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::One => "一级",
            Grade::Two => "二级",
            Grade::Three => "三级",
            Grade::Four => "四级",
            Grade::Five => "五级",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a grade in any accepted written form.
///
/// Accepts plain digits, `digit+级`, CJK numerals, and Roman numerals.
/// Decoration (whitespace, punctuation) is ignored; anything unmapped,
/// including the empty string, is `None`.
pub fn normalize_grade(level: &str) -> Option<Grade> {
    let cleaned: String = level
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || is_cjk(c))
        .collect();

    match cleaned.as_str() {
        "1" | "1级" | "一级" | "I" => Some(Grade::One),
        "2" | "2级" | "二级" | "II" => Some(Grade::Two),
        "3" | "3级" | "三级" | "III" => Some(Grade::Three),
        "4" | "4级" | "四级" | "IV" => Some(Grade::Four),
        "5" | "5级" | "五级" | "V" => Some(Grade::Five),
        _ => None,
    }
}

/// A registry record after grade normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    /// Registered model string, verbatim.
    pub model: String,
    /// Normalized grade; `None` when the upstream value is unmappable.
    pub grade: Option<Grade>,
    /// Upstream grade text, kept for `detail` strings.
    pub grade_raw: String,
    /// Producer name.
    pub producer: String,
    /// Registration number.
    pub registration_number: String,
    /// Upstream category.
    pub category: String,
    /// Announcement timestamp text.
    pub announced_at: String,
}

impl CandidateRecord {
    /// Converts a raw record, dropping records without any declared grade.
    pub fn from_raw(record: RawRecord) -> Option<Self> {
        if !record.has_grade() {
            return None;
        }

        let grade = normalize_grade(&record.declared_level_raw);
        Some(Self {
            model: record.model,
            grade,
            grade_raw: record.declared_level_raw,
            producer: record.producer,
            registration_number: record.registration_number,
            category: record.category,
            announced_at: record.announced_at,
        })
    }

    /// Grade display text: the canonical form when normalizable, the raw
    /// upstream text otherwise.
    pub fn grade_display(&self) -> &str {
        match self.grade {
            Some(grade) => grade.as_str(),
            None => &self.grade_raw,
        }
    }
}

/// Collapses records sharing a model string to the most recently announced
/// one. First-seen order of distinct models is preserved; ties keep the
/// record encountered first.
pub fn dedupe(records: Vec<RawRecord>) -> Vec<CandidateRecord> {
    let mut out: Vec<CandidateRecord> = Vec::new();
    let mut index_by_model: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(candidate) = CandidateRecord::from_raw(record) else {
            continue;
        };

        match index_by_model.get(&candidate.model) {
            Some(&idx) => {
                let kept = &out[idx];
                if compare_announced(&candidate.announced_at, &kept.announced_at)
                    == Ordering::Greater
                {
                    debug!(
                        model = %candidate.model,
                        newer = %candidate.announced_at,
                        older = %kept.announced_at,
                        "replacing duplicate with more recent announcement"
                    );
                    out[idx] = candidate;
                }
            }
            None => {
                index_by_model.insert(candidate.model.clone(), out.len());
                out.push(candidate);
            }
        }
    }

    out
}

/// Orders two announcement timestamps.
///
/// Both sides are parsed as `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`; if either
/// fails to parse the comparison falls back to plain string order, which is
/// correct for the registry's usual sortable format.
pub fn compare_announced(a: &str, b: &str) -> Ordering {
    match (parse_announced(a), parse_announced(b)) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        _ => a.cmp(b),
    }
}

fn parse_announced(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
