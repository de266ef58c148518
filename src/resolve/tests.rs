use std::time::Duration;

use tokio::sync::watch;

use super::*;
use crate::registry::mock::{MockFailure, MockSearchClient, record};
use crate::verdict::Verdict;

fn options(workers: usize) -> BatchOptions {
    BatchOptions {
        workers,
        min_interval: Duration::ZERO,
        ..Default::default()
    }
}

fn gree_query(index: usize) -> Query {
    Query::new(index, "格力KFR-35GW/X", "一级")
}

fn script_gree(mock: &MockSearchClient) {
    // The worker searches with the canonical token, brand prefix stripped.
    mock.script(
        "KFR-35GW/X",
        vec![record("KFR-35GW/X", "1", "珠海格力电器股份有限公司", "2021-01-01")],
    );
}

#[tokio::test]
async fn test_correct_verdict_end_to_end() {
    let mock = MockSearchClient::new();
    script_gree(&mock);

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(1)).await;
    assert_eq!(result.resolutions.len(), 1);

    let r = &result.resolutions[0];
    assert_eq!(r.verdict, Verdict::Correct);
    assert_eq!(r.matched.as_ref().unwrap().model, "KFR-35GW/X");
    assert!(r.detail.contains("一级"));
    assert_eq!(result.stats.processed, 1);
    assert_eq!(result.stats.succeeded, 1);
}

#[tokio::test]
async fn test_incorrect_verdict() {
    let mock = MockSearchClient::new();
    mock.script(
        "KFR-35GW/X",
        vec![record("KFR-35GW/X", "2", "格力", "2021-01-01")],
    );

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(1)).await;
    let r = &result.resolutions[0];
    assert_eq!(r.verdict, Verdict::Incorrect);
    assert!(r.detail.contains("declared(一级)"));
}

#[tokio::test]
async fn test_declared_missing_verdict() {
    let mock = MockSearchClient::new();
    script_gree(&mock);

    let queries = vec![Query::new(0, "格力KFR-35GW/X", "")];
    let result = resolve_batch(&mock, queries, &options(1)).await;
    assert_eq!(result.resolutions[0].verdict, Verdict::DeclaredMissing);
}

#[tokio::test]
async fn test_no_records_is_not_found() {
    let mock = MockSearchClient::new();

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(1)).await;
    let r = &result.resolutions[0];
    assert_eq!(r.verdict, Verdict::NotFound);
    assert!(r.matched.is_none());
    assert_eq!(result.stats.failed, 1);
}

#[tokio::test]
async fn test_unmappable_candidate_grade_is_not_found() {
    let mock = MockSearchClient::new();
    mock.script(
        "KFR-35GW/X",
        vec![record("KFR-35GW/X", "6", "格力", "2021-01-01")],
    );

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(1)).await;
    let r = &result.resolutions[0];
    assert_eq!(r.verdict, Verdict::NotFound);
    // The matched record is still surfaced for inspection.
    assert!(r.matched.is_some());
}

#[tokio::test]
async fn test_search_failure_is_isolated() {
    let mock = MockSearchClient::new();
    script_gree(&mock);
    mock.script_failure("BCD-215", MockFailure::Transport);
    mock.script(
        "KFR-26GW/Y",
        vec![record("KFR-26GW/Y", "2", "美的集团", "2021-01-01")],
    );

    let queries = vec![
        gree_query(0),
        Query::new(1, "海尔BCD-215", "一级"),
        Query::new(2, "美的KFR-26GW/Y", "二级"),
    ];

    let result = resolve_batch(&mock, queries, &options(2)).await;
    assert_eq!(result.resolutions.len(), 3);

    assert_eq!(result.resolutions[0].verdict, Verdict::Correct);
    assert_eq!(result.resolutions[1].verdict, Verdict::NotFound);
    assert!(result.resolutions[1].detail.contains("search failed"));
    assert_eq!(result.resolutions[2].verdict, Verdict::Correct);

    assert_eq!(result.stats.processed, 3);
    assert_eq!(result.stats.failed, 1);
}

#[tokio::test]
async fn test_relevance_downgrade_to_not_found() {
    let mock = MockSearchClient::new();
    // Numerically plausible but semantically unrelated: a chair matched
    // against a vacuum cleaner.
    mock.script(
        "无线吸尘器2",
        vec![record("电脑椅2017版", "2", "某家具公司", "2021-01-01")],
    );

    let queries = vec![Query::new(0, "米家无线吸尘器2", "三级")];
    let result = resolve_batch(&mock, queries, &options(1)).await;

    let r = &result.resolutions[0];
    assert_eq!(r.verdict, Verdict::NotFound);
    assert!(r.detail.contains("not the same product"));
    // The match itself is retained alongside the downgraded verdict.
    assert_eq!(r.matched.as_ref().unwrap().model, "电脑椅2017版");
}

#[tokio::test]
async fn test_relevant_incorrect_stands() {
    let mock = MockSearchClient::new();
    mock.script(
        "KFR-35GW/X",
        vec![record("KFR-35GW/X2", "2", "珠海格力电器股份有限公司", "2021-01-01")],
    );

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(1)).await;
    assert_eq!(result.resolutions[0].verdict, Verdict::Incorrect);
}

#[tokio::test]
async fn test_empty_identifier() {
    let mock = MockSearchClient::new();
    let queries = vec![Query::new(0, "   ", "一级")];
    let result = resolve_batch(&mock, queries, &options(1)).await;
    assert_eq!(result.resolutions[0].verdict, Verdict::NotFound);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_output_order_matches_input_for_any_worker_count() {
    for workers in [1, 2, 3, 8] {
        let mock = MockSearchClient::new();
        let queries: Vec<Query> = (0..17)
            .map(|i| Query::new(i, format!("格力KFR-{i}GW/T"), "一级"))
            .collect();
        for i in 0..17 {
            mock.script(
                &format!("KFR-{i}GW/T"),
                vec![record(&format!("KFR-{i}GW/T"), "1", "格力", "2021-01-01")],
            );
        }

        let result = resolve_batch(&mock, queries, &options(workers)).await;
        assert_eq!(result.resolutions.len(), 17, "workers={workers}");
        for (i, r) in result.resolutions.iter().enumerate() {
            assert_eq!(r.query.index, i, "workers={workers}");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_batch_completes() {
    let mock = MockSearchClient::new();
    script_gree(&mock);

    let opts = BatchOptions {
        workers: 1,
        min_interval: Duration::from_secs(2),
        ..Default::default()
    };
    let queries = vec![gree_query(0), gree_query(1), gree_query(2)];

    let result = resolve_batch(&mock, queries, &opts).await;
    assert_eq!(result.resolutions.len(), 3);
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn test_cancellation_before_scheduling() {
    let mock = MockSearchClient::new();
    script_gree(&mock);

    let (tx, rx) = watch::channel(true);
    let queries = vec![gree_query(0), gree_query(1)];
    let result = resolve_batch_with_cancel(&mock, queries, &options(1), rx).await;

    // Nothing was scheduled; no partial resolutions appear.
    assert!(result.resolutions.is_empty());
    assert_eq!(mock.call_count(), 0);
    drop(tx);
}

#[tokio::test]
async fn test_concurrent_batches_do_not_interfere() {
    let mock_a = MockSearchClient::new();
    script_gree(&mock_a);
    let mock_b = MockSearchClient::new();
    mock_b.script(
        "BCD-215",
        vec![record("BCD-215", "2", "海尔", "2021-01-01")],
    );

    let opts = options(2);
    let batch_a = resolve_batch(&mock_a, vec![gree_query(0)], &opts);
    let batch_b = resolve_batch(
        &mock_b,
        vec![Query::new(0, "海尔BCD-215", "二级")],
        &opts,
    );

    let (result_a, result_b) = futures::future::join(batch_a, batch_b).await;

    assert_eq!(result_a.resolutions[0].verdict, Verdict::Correct);
    assert_eq!(result_b.resolutions[0].verdict, Verdict::Correct);
    assert_eq!(mock_a.call_count(), 1);
    assert_eq!(mock_b.call_count(), 1);
}

#[tokio::test]
async fn test_zero_workers_clamped_to_one() {
    let mock = MockSearchClient::new();
    script_gree(&mock);

    let result = resolve_batch(&mock, vec![gree_query(0)], &options(0)).await;
    assert_eq!(result.resolutions.len(), 1);
    assert_eq!(result.resolutions[0].verdict, Verdict::Correct);
}
