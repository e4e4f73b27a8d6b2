use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::json;
use subject_clean::config::{CleanConfig, IdentifierConfig};
use subject_clean::error::Error;
use subject_clean::filtering::{FieldSpec, Payload};
use subject_clean::identifiers::Declared;
use subject_clean::labels::Label;
use subject_clean::pipelines::{Clean, Pipeline};
use subject_clean::schemes::{RuleBook, Scheme};

const OUTPUTS: [&str; 7] = [
    "11.data.json",
    "label2subject.json",
    "schemeURIs.json",
    "subjectSchemes.json",
    "summary.json",
    "result.csv",
    "useable.csv",
];

fn doc(id: &str, subjects: serde_json::Value, title: Option<&str>) -> serde_json::Value {
    let mut doc = json!({"identifier": id, "subjects": subjects});
    if let Some(title) = title {
        doc["titles"] = json!([{"value": title, "lang": "en"}]);
    }
    doc
}

fn german(mut doc: serde_json::Value) -> serde_json::Value {
    doc["titles"][0]["lang"] = json!("de");
    doc
}

/// Writes three data chunks, a special chunk and a malformed one.
fn raw_dir(dir: &Path) {
    let ddc = |v: &str| json!({"value": v, "subjectScheme": "ddc"});

    // largest chunk, processed and merged first
    let first = json!({"documents": [
        doc("a", json!([ddc("610")]), Some("Clinical outcomes of a randomised trial")),
        doc("c", json!([ddc("004")]), None),
        doc("d", json!([]), Some("No subjects at all")),
        doc("e", json!([ddc("610"), {"value": "C53", "subjectScheme": "JEL"}]), Some("Mixed")),
        german(doc("f", json!([ddc("004.1")]), Some("Ein Titel ohne englische Fassung"))),
    ]});
    let mut first = serde_json::to_string(&first).unwrap();
    first.push_str(&" ".repeat(512));
    fs::write(dir.join("00.json"), first).unwrap();

    let second = json!({"documents": [
        doc("b", json!([ddc("611.2")]), Some("Clinical outcomes of a randomised trial")),
    ]});
    fs::write(dir.join("01.json"), serde_json::to_string(&second).unwrap()).unwrap();

    let special = json!({"documents": [
        doc("w", json!([]), Some("Quantum mechanics")),
    ]});
    fs::write(
        dir.join("wiki_physics.json"),
        serde_json::to_string(&special).unwrap(),
    )
    .unwrap();

    fs::write(dir.join("02.json"), "{\"documents\": [").unwrap();
    fs::write(dir.join("README.txt"), "not a chunk").unwrap();
}

fn config(raw: &Path, out: &Path) -> CleanConfig {
    let mut config = CleanConfig::new(raw, out);
    config.fields = vec![FieldSpec::new("title", 2)];
    config.identifier = IdentifierConfig::Declared;
    config.special = [("wiki_physics.json".to_string(), Label::new(2).unwrap())]
        .into_iter()
        .collect();
    config.workers = 2;
    config
}

fn read_rows(path: &Path) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            let row: BTreeMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            (row["id"].clone(), row)
        })
        .collect()
}

#[test_log::test]
fn end_to_end() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let clean = Clean::new(config(raw.path(), out.path()));
    let summary = clean.run().unwrap();
    let run_dir = clean.run_dir().unwrap();

    // the malformed chunk is left out
    assert_eq!(summary.chunks, 3);
    assert_eq!(summary.documents, 7);
    assert_eq!(summary.not_annotatable, 1);
    assert_eq!(summary.multi_annotated, 1);
    assert_eq!(summary.not_fit, 2);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.special, 1);
    assert_eq!(summary.useable, 2);

    for name in OUTPUTS.iter().chain(["02.data.json", "config.json"].iter()) {
        assert!(run_dir.join(name).is_file(), "{name}");
    }
    assert!(!run_dir.join("08.data.json").exists());

    let rows = read_rows(&run_dir.join("result.csv"));
    assert_eq!(rows.len(), 7);
    assert_eq!(rows["a"]["useable"], "true");
    assert_eq!(rows["b"]["duplicate"], "true");
    assert_eq!(rows["b"]["useable"], "false");
    assert_eq!(rows["c"]["not_fit"], "true");
    assert_eq!(rows["d"]["not_annot"], "true");
    assert_eq!(rows["e"]["multi_annot"], "true");
    assert_eq!(rows["f"]["not_fit"], "true");
    assert_eq!(rows["w"]["special"], "true");
    assert_eq!(rows["a"]["ddc"], "610");

    let useable = read_rows(&run_dir.join("useable.csv"));
    assert_eq!(
        useable.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["a", "w"]
    );

    let medical: BTreeMap<String, Payload> =
        serde_json::from_slice(&fs::read(run_dir.join("11.data.json")).unwrap()).unwrap();
    assert_eq!(medical.len(), 1);
    let payload = medical.values().next().unwrap();
    assert_eq!(payload["title"], "Clinical outcomes of a randomised trial");

    let schemes: BTreeMap<String, usize> =
        serde_json::from_slice(&fs::read(run_dir.join("subjectSchemes.json")).unwrap()).unwrap();
    assert_eq!(schemes["ddc"], 5);
    assert_eq!(schemes["JEL"], 1);
}

#[test]
fn rerun_is_identical() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let clean = Clean::new(config(raw.path(), out.path()));
    let first = clean.run().unwrap();
    let run_dir = clean.run_dir().unwrap();
    let before: Vec<Vec<u8>> = OUTPUTS
        .iter()
        .map(|name| fs::read(run_dir.join(name)).unwrap())
        .collect();

    // partial results are reused on the second run
    let second = clean.run().unwrap();
    assert_eq!(first, second);
    for (name, content) in OUTPUTS.iter().zip(before) {
        assert_eq!(fs::read(run_dir.join(name)).unwrap(), content, "{name}");
    }
}

#[test]
fn deduplication_is_stable() {
    let raw = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let outputs: Vec<(Vec<u8>, Vec<u8>)> = (0..2)
        .map(|_| {
            let out = tempfile::tempdir().unwrap();
            let mut config = config(raw.path(), out.path());
            config.workers = 4;
            let clean = Clean::new(config);
            clean.run().unwrap();
            let run_dir = clean.run_dir().unwrap();
            (
                fs::read(run_dir.join("useable.csv")).unwrap(),
                fs::read(run_dir.join("11.data.json")).unwrap(),
            )
        })
        .collect();
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn config_changes_the_run_dir() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let first = Clean::new(config(raw.path(), out.path()));
    let mut other = config(raw.path(), out.path());
    other.fields = vec![FieldSpec::new("title", 5)];
    let second = Clean::new(other);
    assert_ne!(first.run_dir().unwrap(), second.run_dir().unwrap());

    // longer titles only
    let summary = second.run().unwrap();
    assert_eq!(summary.useable, 1);
    assert!(!second.run_dir().unwrap().join("02.data.json").exists());
}

#[test]
fn identifier_override() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    // a model path that does not exist is never loaded
    let mut config = config(raw.path(), out.path());
    config.identifier = IdentifierConfig::FastText {
        path: raw.path().join("missing.bin"),
        threshold: 0.8,
    };
    assert!(Clean::new(config.clone()).run().is_err());

    let summary = Clean::new(config)
        .with_identifier(Box::new(Declared))
        .run()
        .unwrap();
    assert_eq!(summary.useable, 2);
}

#[test]
fn stale_rules_abort() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let mut config = config(raw.path(), out.path());
    config.rules_hash = Some("0".repeat(64));
    let clean = Clean::new(config);
    assert!(matches!(
        clean.run(),
        Err(Error::RulesHashMismatch { .. })
    ));
    assert!(!clean.run_dir().unwrap().join("chunks").exists());
}

#[test]
fn malformed_subjects_keep_the_chunk() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let chunk = json!({"documents": [
        doc("a", json!([{"value": "610", "subjectScheme": "ddc"}]), Some("Clinical outcomes of a trial")),
        doc("n", json!([{"value": 610, "subjectScheme": "ddc"}, "Physics"]), Some("Numeric subject value")),
    ]});
    fs::write(raw.path().join("00.json"), serde_json::to_string(&chunk).unwrap()).unwrap();

    let clean = Clean::new(config(raw.path(), out.path()));
    let summary = clean.run().unwrap();
    assert_eq!(summary.chunks, 1);
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.useable, 1);
    assert_eq!(summary.not_annotatable, 1);

    let rows = read_rows(&clean.run_dir().unwrap().join("result.csv"));
    assert_eq!(rows["a"]["useable"], "true");
    assert_eq!(rows["n"]["not_annot"], "true");
}

#[test]
fn edited_rules_relabel_processed_chunks() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    raw_dir(raw.path());

    let rules_path = raw.path().join("rules.json");
    let mut book = RuleBook::builtin();
    fs::write(&rules_path, serde_json::to_vec(&book).unwrap()).unwrap();
    let mut config = config(raw.path(), out.path());
    config.rules = Some(rules_path.clone());
    let clean = Clean::new(config);

    let first = clean.run().unwrap();
    let medical = Label::new(11).unwrap();
    assert!(first.labels.contains_key(&medical));

    // every dewey row now points to physical sciences
    let physics = Label::new(2).unwrap();
    for rule in &mut book.tables.get_mut(&Scheme::Ddc).unwrap().rules {
        rule.label = physics;
    }
    fs::write(&rules_path, serde_json::to_vec(&book).unwrap()).unwrap();

    let second = clean.run().unwrap();
    assert_eq!(second.labels.keys().copied().collect::<Vec<_>>(), vec![physics]);
    assert_eq!(second.useable, 2);
    let run_dir = clean.run_dir().unwrap();
    assert!(!run_dir.join("11.data.json").exists());
    let rows = read_rows(&run_dir.join("result.csv"));
    assert_eq!(rows["a"]["labels"], (1u32 << 2).to_string());
}
