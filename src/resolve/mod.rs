//! Batch resolution orchestration.
//!
//! Drives many query resolutions concurrently over a fixed worker pool.
//! Each worker exclusively owns one registry client and its own rate-limit
//! clock; resolutions are collected as workers finish and re-sorted into
//! submission order before the batch returns.

mod worker;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tracing::{info, instrument, warn};

use crate::candidate::CandidateRecord;
use crate::constants::{DEFAULT_MIN_INTERVAL_SECS, DEFAULT_WORKERS, aggregate_rate};
use crate::registry::{SearchClient, SearchClientFactory};
use crate::verdict::Verdict;
use crate::vocab::Vocabulary;

use worker::{RateLimiter, resolve_one};

/// One declared attribute to reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Submission ordinal; batch output is sorted by this.
    pub index: usize,
    /// Raw, free-text product identifier.
    pub raw_identifier: String,
    /// Declared efficiency grade, possibly empty.
    pub declared_level: String,
}

impl Query {
    pub fn new(index: usize, raw_identifier: impl Into<String>, declared_level: impl Into<String>) -> Self {
        Self {
            index,
            raw_identifier: raw_identifier.into(),
            declared_level: declared_level.into(),
        }
    }
}

/// Pipeline stage of one query's resolution.
///
/// `Incorrect` verdicts pass through `Revalidated`; everything else goes
/// straight from `Decided` to `Final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Pending,
    Searching,
    Scoring,
    Decided,
    Revalidated,
    Final,
}

/// Final output for one query.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub query: Query,
    pub verdict: Verdict,
    /// Best-matching registry record, when any usable record came back.
    pub matched: Option<CandidateRecord>,
    /// Match score of `matched`.
    pub score: Option<f64>,
    /// Human-readable explanation of the verdict.
    pub detail: String,
}

impl Resolution {
    fn not_found(query: Query, detail: String) -> Self {
        Self {
            query,
            verdict: Verdict::NotFound,
            matched: None,
            score: None,
            detail,
        }
    }
}

/// Batch tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Pool size; each worker owns one registry client.
    pub workers: usize,
    /// Minimum interval between one worker's registry calls.
    pub min_interval: Duration,
    /// Matching tables.
    pub vocab: Vocabulary,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            min_interval: Duration::from_secs_f64(DEFAULT_MIN_INTERVAL_SECS),
            vocab: Vocabulary::default(),
        }
    }
}

/// Aggregate counters over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Queries that produced a resolution.
    pub processed: usize,
    /// Resolutions whose search round-trip succeeded.
    pub succeeded: usize,
    /// Resolutions produced by a failed or empty search.
    pub failed: usize,
}

/// Ordered resolutions plus run counters.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// One resolution per submitted query, in submission order. Shorter
    /// than the input only when the batch was cancelled.
    pub resolutions: Vec<Resolution>,
    pub stats: BatchStats,
}

/// Resolves a batch of queries, preserving submission order in the output.
///
/// Every query yields exactly one resolution; per-item failures are isolated
/// into `NotFound` resolutions and never abort siblings.
pub async fn resolve_batch<F>(factory: &F, queries: Vec<Query>, options: &BatchOptions) -> BatchResult
where
    F: SearchClientFactory,
{
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    resolve_batch_with_cancel(factory, queries, options, cancel_rx).await
}

/// [`resolve_batch`] with a cancellation flag.
///
/// Flipping the watch value to `true` stops scheduling of new queries;
/// in-flight queries run to completion. Queries never scheduled yield no
/// resolution, so a cancelled batch can return fewer resolutions than
/// queries (still in submission order).
#[instrument(skip_all, fields(queries = queries.len(), workers = options.workers))]
pub async fn resolve_batch_with_cancel<F>(
    factory: &F,
    queries: Vec<Query>,
    options: &BatchOptions,
    cancel: watch::Receiver<bool>,
) -> BatchResult
where
    F: SearchClientFactory,
{
    let workers = options.workers.max(1);
    let total = queries.len();

    info!(
        total,
        workers,
        interval_secs = options.min_interval.as_secs_f64(),
        rate = aggregate_rate(workers, options.min_interval.as_secs_f64()),
        vocab = options.vocab.version,
        "starting batch resolution"
    );

    let (work_tx, work_rx) = mpsc::channel::<Query>(total.max(1));
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let stats = Arc::new(Mutex::new(BatchStats::default()));

    let mut handles = Vec::with_capacity(workers);
    for worker_id in 0..workers {
        let work_rx = Arc::clone(&work_rx);
        let stats = Arc::clone(&stats);
        let cancel = cancel.clone();
        let vocab = options.vocab;
        let min_interval = options.min_interval;

        // Each worker owns its client for its whole lifetime; a failed
        // construction degrades that worker to emitting NotFound
        // resolutions rather than losing coverage.
        let client = factory.build().await;

        handles.push(tokio::spawn(run_worker(
            worker_id,
            client,
            work_rx,
            cancel,
            stats,
            vocab,
            min_interval,
        )));
    }

    for query in queries {
        if work_tx.send(query).await.is_err() {
            break;
        }
    }
    drop(work_tx);

    let mut resolutions = Vec::with_capacity(total);
    for handle in handles {
        match handle.await {
            Ok(mut part) => resolutions.append(&mut part),
            Err(e) => warn!(error = %e, "worker task failed"),
        }
    }

    resolutions.sort_by_key(|r| r.query.index);

    let stats = *stats.lock();
    info!(
        resolved = resolutions.len(),
        succeeded = stats.succeeded,
        failed = stats.failed,
        "batch resolution finished"
    );

    BatchResult { resolutions, stats }
}

async fn run_worker<C: SearchClient>(
    worker_id: usize,
    client: Result<C, crate::registry::SearchError>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<Query>>>,
    cancel: watch::Receiver<bool>,
    stats: Arc<Mutex<BatchStats>>,
    vocab: Vocabulary,
    min_interval: Duration,
) -> Vec<Resolution> {
    let mut limiter = RateLimiter::new(min_interval);
    let mut client = match client {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(worker_id, error = %e, "registry client construction failed");
            None
        }
    };

    let mut resolutions = Vec::new();

    loop {
        if *cancel.borrow() {
            info!(worker_id, "cancellation observed, stopping");
            break;
        }

        let query = {
            let mut rx = work_rx.lock().await;
            match rx.recv().await {
                Some(query) => query,
                None => break,
            }
        };

        let resolution = match client.as_mut() {
            Some(client) => resolve_one(client, &mut limiter, query, &vocab).await,
            None => Resolution::not_found(query, "registry client unavailable".to_string()),
        };

        {
            let mut stats = stats.lock();
            stats.processed += 1;
            if resolution.matched.is_some() {
                stats.succeeded += 1;
            } else {
                stats.failed += 1;
            }
        }

        resolutions.push(resolution);
    }

    resolutions
}
