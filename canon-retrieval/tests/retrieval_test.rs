//! End-to-end retrieval over an index built from the sample corpus.

use canon_core::config::{CanonConfig, EmbeddingConfig, RetrievalConfig};
use canon_core::errors::{CanonError, RetrievalError};
use canon_core::models::Confidence;
use canon_embeddings::EmbeddingEngine;
use canon_index::{ops, IndexHandle};
use canon_retrieval::{ops as retrieval_ops, RetrievalEngine};
use tempfile::TempDir;

fn fixture_index() -> (TempDir, IndexHandle, EmbeddingEngine) {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    test_fixtures::write_corpus(&corpus).unwrap();

    let engine = EmbeddingEngine::new(EmbeddingConfig::default());
    let handle = IndexHandle::open(dir.path().join("index"));
    ops::rebuild(&handle, &corpus, &engine, &CanonConfig::default()).unwrap();
    (dir, handle, engine)
}

#[test]
fn incomplete_specs_query_hits_specification_completeness() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let response = retrieval
        .query("how to handle incomplete specs", None, Some(3))
        .unwrap();

    let top_ids: Vec<&str> = response.hits.iter().map(|h| h.id.as_str()).collect();
    assert!(
        top_ids.contains(&"coding-context-specification-completeness"),
        "expected scenario record in top-3, got {top_ids:?}"
    );
    assert!(
        response.confidence.value() >= Confidence::LOW,
        "expected confidence above the low threshold, got {}",
        response.confidence
    );
    assert!(!response.low_confidence);
}

#[test]
fn results_are_ordered_by_score() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let response = retrieval
        .query("write a failing test before making it pass", None, Some(5))
        .unwrap();
    for pair in response.hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn domain_hint_restricts_results() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let response = retrieval
        .query("escalate before destructive operations", Some("conduct"), Some(5))
        .unwrap();
    assert!(!response.hits.is_empty());
    assert!(response.hits.iter().all(|h| h.domain == "conduct"));
    assert_eq!(response.routed_domains, vec!["conduct".to_string()]);
}

#[test]
fn unknown_domain_hint_is_an_error() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let err = retrieval
        .query("anything", Some("no-such-domain"), None)
        .unwrap_err();
    assert!(matches!(
        err,
        CanonError::Retrieval(RetrievalError::UnknownDomain { .. })
    ));
}

#[test]
fn top_k_limits_hit_count() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let response = retrieval.query("principles", None, Some(2)).unwrap();
    assert!(response.hits.len() <= 2);
}

#[test]
fn query_is_read_only_against_the_index() {
    let (_dir, handle, embeddings) = fixture_index();
    let retrieval = RetrievalEngine::new(&handle, &embeddings, RetrievalConfig::default());

    let generation_before = handle.current().unwrap().manifest.generation.clone();
    retrieval.query("any query at all", None, None).unwrap();
    let generation_after = handle.current().unwrap().manifest.generation.clone();
    assert_eq!(generation_before, generation_after);
}

#[test]
fn test_query_op_smoke_tests_the_active_index() {
    let (_dir, handle, embeddings) = fixture_index();
    let response = retrieval_ops::test_query(
        &handle,
        &embeddings,
        &RetrievalConfig::default(),
        "immutable audit trail for decisions",
    )
    .unwrap();
    assert!(!response.hits.is_empty());
}
