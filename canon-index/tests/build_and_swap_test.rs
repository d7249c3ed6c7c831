//! Integration tests for the build path: full rebuild from a corpus,
//! shadow-build atomicity, collision policy, and validator recovery.

use std::fs;
use std::path::Path;

use canon_core::config::{CanonConfig, EmbeddingConfig};
use canon_core::errors::CanonResult;
use canon_core::models::RecordKind;
use canon_core::traits::IEmbeddingProvider;
use canon_embeddings::EmbeddingEngine;
use canon_index::{ops, IndexHandle, IntegrityStatus};

fn engine() -> EmbeddingEngine {
    EmbeddingEngine::new(EmbeddingConfig::default())
}

fn config() -> CanonConfig {
    CanonConfig::default()
}

fn build_fixture_index(corpus: &Path, index_dir: &Path) -> IndexHandle {
    test_fixtures::write_corpus(corpus).expect("corpus written");
    let handle = IndexHandle::open(index_dir);
    ops::rebuild(&handle, corpus, &engine(), &config()).expect("rebuild succeeds");
    handle
}

#[test]
fn rebuild_extracts_and_activates_full_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let handle = build_fixture_index(&dir.path().join("corpus"), &dir.path().join("index"));

    let index = handle.current().unwrap();
    // 3 coding principles + 2 coding methods + 2 conduct principles.
    assert_eq!(index.manifest.record_count, 7);
    assert_eq!(index.manifest.domains.len(), 2);
    assert_eq!(index.record_vectors.len(), 7);
    assert_eq!(index.domain_vectors.len(), 2);

    let spec = index
        .record_by_id("coding-context-specification-completeness")
        .expect("scenario record exists");
    assert_eq!(spec.category, "context");
    assert_eq!(spec.kind, RecordKind::Principle);

    let method = index
        .record_by_id("coding-method-red-green-refactor")
        .expect("method record exists");
    assert_eq!(method.kind, RecordKind::Method);
    // "Methods" is not in the category map; methods fall back to general.
    assert_eq!(method.category, "general");
}

#[test]
fn rebuild_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    let handle = build_fixture_index(&corpus, &dir.path().join("index"));

    let first = handle.current().unwrap();
    ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();
    let second = handle.current().unwrap();

    assert_ne!(first.manifest.generation, second.manifest.generation);
    assert_eq!(
        serde_json::to_vec(&first.records).unwrap(),
        serde_json::to_vec(&second.records).unwrap()
    );
    assert_eq!(first.record_vectors, second.record_vectors);
    assert_eq!(first.domain_vectors, second.domain_vectors);
}

struct FailingProvider;

impl IEmbeddingProvider for FailingProvider {
    fn embed(&self, _: &str) -> CanonResult<Vec<f32>> {
        Err(canon_core::errors::EmbeddingError::ProviderUnavailable {
            name: "failing".to_string(),
        }
        .into())
    }
    fn embed_batch(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
    fn dimensions(&self) -> usize {
        256
    }
    fn model_id(&self) -> &str {
        "hashed-tf-v1"
    }
    fn is_available(&self) -> bool {
        false
    }
}

fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let name = path.strip_prefix(dir).unwrap().to_string_lossy().into_owned();
                files.push((name, fs::read(&path).unwrap()));
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

#[test]
fn failed_build_leaves_active_index_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    let index_dir = dir.path().join("index");
    let handle = build_fixture_index(&corpus, &index_dir);

    let before = snapshot(&index_dir);

    let broken = EmbeddingEngine::with_provider(Box::new(FailingProvider), EmbeddingConfig::default());
    let result = ops::rebuild(&handle, &corpus, &broken, &config());
    assert!(result.is_err(), "build with failing provider must abort");

    let after = snapshot(&index_dir);
    assert_eq!(before, after, "active artifacts must be untouched");
    assert_eq!(
        ops::validate(&handle).unwrap().status,
        IntegrityStatus::Ok
    );
}

#[test]
fn identifier_collision_keeps_later_record() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    fs::create_dir_all(corpus.join("solo")).unwrap();
    fs::write(
        corpus.join("domains.toml"),
        r#"
[domains.solo]
display_name = "Solo"
description = "single domain"
priority = 1
sources = [{ path = "solo/doc.md", kind = "principle" }]
"#,
    )
    .unwrap();
    fs::write(
        corpus.join("solo/doc.md"),
        "## Part\n\n### Fail Fast\n**Definition**\nearlier version\n\n### Fail  Fast!\n**Definition**\nlater version\n",
    )
    .unwrap();

    let handle = IndexHandle::open(dir.path().join("index"));
    let report = ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();
    assert_eq!(report.collisions, 1);
    assert_eq!(report.record_count, 1);

    let index = handle.current().unwrap();
    let survivor = index.record_by_id("solo-general-fail-fast").unwrap();
    assert!(survivor.text.contains("later version"));
}

#[test]
fn validator_detects_row_parity_corruption_and_rebuild_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    let index_dir = dir.path().join("index");
    let handle = build_fixture_index(&corpus, &index_dir);

    // Drop one row from the content-vector matrix on disk.
    let generation = handle.current().unwrap().manifest.generation.clone();
    let vectors_path = index_dir.join(&generation).join("record_vectors.json");
    let mut vectors: Vec<Vec<f32>> =
        serde_json::from_slice(&fs::read(&vectors_path).unwrap()).unwrap();
    vectors.pop();
    fs::write(&vectors_path, serde_json::to_vec(&vectors).unwrap()).unwrap();

    let report = ops::validate(&handle).unwrap();
    assert_eq!(report.status, IntegrityStatus::Corrupt);
    assert!(report
        .problems
        .iter()
        .any(|p| p.contains("content-vector matrix")));

    // The sanctioned recovery: a full rebuild from documents.
    ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();
    assert_eq!(ops::validate(&handle).unwrap().status, IntegrityStatus::Ok);
}

#[test]
fn malformed_domain_entry_is_skipped_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    fs::create_dir_all(corpus.join("good")).unwrap();
    fs::write(
        corpus.join("domains.toml"),
        r#"
[domains.good]
display_name = "Good"
description = "a valid domain"
priority = 1
sources = [{ path = "good/doc.md", kind = "principle" }]

[domains.bad]
display_name = "Bad"
"#,
    )
    .unwrap();
    fs::write(
        corpus.join("good/doc.md"),
        "## Part\n### Keep Going\n**Definition**\nvalid body\n",
    )
    .unwrap();

    let handle = IndexHandle::open(dir.path().join("index"));
    let report = ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();
    assert_eq!(report.record_count, 1);
    assert_eq!(report.skipped_domains.len(), 1);
    assert_eq!(report.skipped_domains[0].key, "bad");
}

#[test]
fn old_generations_are_garbage_collected() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    let index_dir = dir.path().join("index");
    let handle = build_fixture_index(&corpus, &index_dir);

    ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();
    ops::rebuild(&handle, &corpus, &engine(), &config()).unwrap();

    // Default retention keeps the active generation plus one predecessor.
    let generations = fs::read_dir(&index_dir)
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_type().unwrap().is_dir())
        .count();
    assert_eq!(generations, 2);
}
