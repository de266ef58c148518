use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::candidate::dedupe;
use crate::normalize::normalize;
use crate::registry::SearchClient;
use crate::scoring::best_match;
use crate::verdict::{Verdict, decide, is_relevant};
use crate::vocab::Vocabulary;

use super::{Query, Resolution, ResolutionState};

/// Per-worker rate limiter: tracks the worker's own last registry call and
/// sleeps off the remainder of the configured minimum interval.
#[derive(Debug)]
pub(super) struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    pub(super) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Waits until this worker's interval budget allows another call.
    pub(super) async fn acquire(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "rate limit wait");
                tokio::time::sleep(wait).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}

/// Runs one query through the full pipeline.
///
/// Total: every failure mode lands in a `Final` resolution, never an error.
pub(super) async fn resolve_one<C: SearchClient>(
    client: &mut C,
    limiter: &mut RateLimiter,
    query: Query,
    vocab: &Vocabulary,
) -> Resolution {
    let mut state = ResolutionState::Pending;
    debug!(index = query.index, ?state, "query accepted");

    let raw = query.raw_identifier.trim().to_string();
    if raw.is_empty() {
        return Resolution::not_found(query, "empty identifier".to_string());
    }

    let canonical = normalize(&raw, vocab);
    let search_key = if canonical.is_empty() { &raw } else { &canonical };

    state = ResolutionState::Searching;
    debug!(index = query.index, %raw, %canonical, ?state, "searching registry");

    limiter.acquire().await;
    let records = match client.search(search_key).await {
        Ok(records) => records,
        Err(e) => {
            warn!(index = query.index, %raw, error = %e, "search failed");
            return Resolution::not_found(query, format!("search failed: {e}"));
        }
    };

    state = ResolutionState::Scoring;
    debug!(index = query.index, count = records.len(), ?state, "scoring candidates");

    let candidates = dedupe(records);
    if candidates.is_empty() {
        return Resolution::not_found(query, "no usable records returned".to_string());
    }

    let found = candidates.len();
    let Some(best) = best_match(&raw, &canonical, candidates, vocab) else {
        return Resolution::not_found(query, format!("no match among {found} records"));
    };

    state = ResolutionState::Decided;
    let verdict = decide(&query.declared_level, &best.candidate.grade_raw);
    debug!(index = query.index, %verdict, score = best.score, ?state, "verdict decided");

    let grade = best.candidate.grade_display().to_string();
    let model = best.candidate.model.clone();
    let mut detail = match verdict {
        Verdict::Correct => format!("matched {model} - {grade}"),
        Verdict::Incorrect => format!(
            "grade mismatch: declared({}) vs registry({grade}) - {model}",
            query.declared_level
        ),
        Verdict::DeclaredMissing => {
            format!("declared grade missing; registry shows {grade} - {model}")
        }
        Verdict::NotFound => format!("registry grade not recognized: {model}"),
    };

    if best.low_confidence {
        detail.push_str(&format!("; low-confidence match (score {:.1})", best.score));
    }

    let mut verdict = verdict;
    if verdict == Verdict::Incorrect {
        state = ResolutionState::Revalidated;
        let relevant = is_relevant(&raw, "", &model, &best.candidate.producer, vocab);
        debug!(index = query.index, relevant, ?state, "relevance re-validation");

        if !relevant {
            // The only permitted post-decision transition.
            verdict = Verdict::NotFound;
            detail = format!("matched record {model} is not the same product; treated as not found");
        }
    }

    state = ResolutionState::Final;
    debug!(index = query.index, %verdict, ?state, "resolution final");

    Resolution {
        query,
        verdict,
        matched: Some(best.candidate),
        score: Some(best.score),
        detail,
    }
}
