//! Verdict decision over normalized grades.

pub mod relevance;

#[cfg(test)]
mod tests;

pub use relevance::is_relevant;

use crate::candidate::normalize_grade;

/// Outcome of reconciling a declared grade against a matched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Declared and registry grades agree.
    Correct,
    /// Both grades normalize but disagree.
    Incorrect,
    /// The registry side yields no normalizable grade.
    NotFound,
    /// The registry has a grade but the declared side is empty/unmappable.
    DeclaredMissing,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
            Verdict::NotFound => "not found",
            Verdict::DeclaredMissing => "declared missing",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the verdict for a declared/candidate grade pair.
///
/// Both sides go through grade normalization first. A candidate grade that
/// does not normalize means the record cannot be reconciled (`NotFound`),
/// regardless of the declared side.
pub fn decide(declared: &str, candidate: &str) -> Verdict {
    let declared = normalize_grade(declared);
    let candidate = normalize_grade(candidate);

    match (declared, candidate) {
        (_, None) => Verdict::NotFound,
        (None, Some(_)) => Verdict::DeclaredMissing,
        (Some(d), Some(c)) if d == c => Verdict::Correct,
        _ => Verdict::Incorrect,
    }
}
