use std::path::{Path, PathBuf};
use std::process::Command;

fn tempdir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rustnlp-cli-test-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Adapter binary pinned to a cache dir and a dead registry address, so no
/// test ever reaches the network.
fn bin(cache: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rustnlp"));
    cmd.env("RUSTNLP_CACHE_DIR", cache);
    cmd.env("RUSTNLP_REGISTRY", "http://127.0.0.1:1");
    cmd
}

/// Install a small English package with the given pipeline into the cache.
fn install_package(cache: &Path, name: &str, pipeline: &[&str]) {
    let dir = cache.join(name);
    std::fs::create_dir_all(&dir).unwrap();

    let meta = serde_json::json!({
        "lang": "en",
        "name": name,
        "version": "0.1.0",
        "description": "Tiny English test package",
        "pipeline": pipeline,
    });
    let config = serde_json::json!({
        "nlp": {
            "lang": "en",
            "pipeline": pipeline,
            "batch_size": 64,
        },
        "components": {
            "sentencizer": {"punct_chars": [".", "!", "?"]}
        }
    });
    let vocab = serde_json::json!({
        "lang": "en",
        "cfg": {"oov_prob": -20.0},
        "lexemes": ["Hello", "world", "the", "quick", "brown", "fox", "jumps"],
        "stop_words": ["the"],
    });
    let tagger = serde_json::json!({
        "map": {
            "the": "DT",
            "quick": "JJ", "brown": "JJ", "lazy": "JJ",
            "fox": "NN", "dog": "NN", "world": "NN",
            "jumps": "VBZ",
            "over": "IN",
        },
    });
    let lemmatizer = serde_json::json!({
        "lookup": {},
        "rules": {"VERB": [["s", ""]], "NOUN": [["s", ""]]}
    });
    let ner = serde_json::json!({
        "patterns": [{"label": "ORG", "pattern": ["Acme", "Corp"]}]
    });

    for (file, value) in [
        ("meta.json", &meta),
        ("config.json", &config),
        ("vocab.json", &vocab),
        ("tagger.json", &tagger),
        ("lemmatizer.json", &lemmatizer),
        ("ner.json", &ner),
    ] {
        std::fs::write(dir.join(file), serde_json::to_string_pretty(value).unwrap()).unwrap();
    }
}

fn json_line(stdout: &[u8]) -> serde_json::Value {
    let text = String::from_utf8_lossy(stdout);
    let mut lines = text.lines();
    let line = lines.next().expect("expected one line of JSON");
    assert_eq!(lines.next(), None, "expected exactly one line, got: {text}");
    serde_json::from_str(line).expect("stdout is not valid JSON")
}

// ── dispatch ────────────────────────────────────────────────────────

#[test]
fn unknown_verb_is_silent() {
    let cache = tempdir();
    let out = bin(&cache).arg("frobnicate").output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_verb_fails() {
    let cache = tempdir();
    let out = bin(&cache).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing command"));
}

// ── info ────────────────────────────────────────────────────────────

#[test]
fn info_prints_nonempty_text() {
    let cache = tempdir();
    let out = bin(&cache).arg("info").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.trim().is_empty());
    assert!(stdout.contains("rustnlp"));
    assert!(stdout.contains("none installed"));
}

#[test]
fn info_lists_installed_packages() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["tagger", "parser"]);
    let out = bin(&cache).arg("info").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("en-core-tiny"));
    assert!(stdout.contains("en 0.1.0"));
}

// ── load ────────────────────────────────────────────────────────────

#[test]
fn load_reports_package_metadata() {
    let cache = tempdir();
    install_package(
        &cache,
        "en-core-tiny",
        &["tagger", "lemmatizer", "parser", "ner"],
    );
    let out = bin(&cache).args(["load", "en-core-tiny"]).output().unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    for key in [
        "pipe_names",
        "path",
        "vocab",
        "config",
        "meta",
        "components",
        "disabled",
        "max_length",
        "batch_size",
    ] {
        assert!(report.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(
        report["pipe_names"],
        serde_json::json!(["tagger", "lemmatizer", "parser", "ner"])
    );
    assert_eq!(report["vocab"]["lang"], "en");
    assert_eq!(report["vocab"]["length"], 7);
    assert_eq!(report["vocab"]["vectors_length"], 0);
    assert_eq!(report["batch_size"], 64);
    assert_eq!(report["max_length"], 1_000_000);
    assert_eq!(report["optimizer"], serde_json::Value::Null);
    assert_eq!(report["meta"]["name"], "en-core-tiny");
    assert!(report["pipe_meta"]["tagger"]["assigns"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("token.tag")));
    assert!(report["path"].as_str().unwrap().contains("en-core-tiny"));
}

#[test]
fn load_missing_operand_fails() {
    let cache = tempdir();
    let out = bin(&cache).arg("load").output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn load_uninstalled_model_fails() {
    let cache = tempdir();
    let out = bin(&cache).args(["load", "xx-missing"]).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("xx-missing"));
}

// ── nlp ─────────────────────────────────────────────────────────────

#[test]
fn nlp_hello_world() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["tagger"]);
    let out = bin(&cache)
        .args(["nlp", "Hello world.", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    assert_eq!(report["model"], "en-core-tiny");
    assert_eq!(report["doc"]["text"], "Hello world.");
    assert_eq!(report["doc"]["text_with_ws"], "Hello world.");

    let tokens = report["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["text"], "Hello");
    assert_eq!(tokens[0]["whitespace"], " ");
    assert_eq!(tokens[0]["is_alpha"], true);
    assert_eq!(tokens[0]["is_title"], true);
    assert_eq!(tokens[0]["is_oov"], false);
    assert_eq!(tokens[1]["text"], "world");
    assert_eq!(tokens[1]["idx"], 6);
    assert_eq!(tokens[2]["text"], ".");
    assert_eq!(tokens[2]["is_punct"], true);
    assert_eq!(tokens[2]["tag"], ".");
    assert_eq!(tokens[2]["pos"], "PUNCT");
}

#[test]
fn nlp_without_parser_has_empty_parse_projection() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["tagger"]);
    let out = bin(&cache)
        .args(["nlp", "The quick brown fox jumps.", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    assert_eq!(report["doc"]["is_tagged"], true);
    assert_eq!(report["doc"]["is_parsed"], false);
    assert_eq!(report["doc"]["is_nered"], false);
    assert_eq!(report["doc"]["is_sentenced"], false);
    assert_eq!(report["noun_chunks"], serde_json::json!([]));
    assert_eq!(report["sents"], serde_json::json!([]));
    assert_eq!(report["ents"], serde_json::json!([]));
    // unparsed tokens head themselves
    let tokens = report["tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["head"], 0);
    assert_eq!(tokens[0]["dep"], "");
}

#[test]
fn nlp_full_pipeline_projects_all_layers() {
    let cache = tempdir();
    install_package(
        &cache,
        "en-core-tiny",
        &["tagger", "lemmatizer", "parser", "ner"],
    );
    let out = bin(&cache)
        .args(["nlp", "The quick brown fox jumps over the lazy dog.", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    assert_eq!(report["doc"]["is_tagged"], true);
    assert_eq!(report["doc"]["is_parsed"], true);
    assert_eq!(report["doc"]["is_nered"], true);
    assert_eq!(report["doc"]["is_sentenced"], true);

    let chunks = report["noun_chunks"].as_array().unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0]["start"], 0);
    assert_eq!(chunks[0]["end"], 4);

    let sents = report["sents"].as_array().unwrap();
    assert_eq!(sents.len(), 1);
    assert_eq!(sents[0]["tokens"].as_array().unwrap().len(), 10);

    let tokens = report["tokens"].as_array().unwrap();
    assert_eq!(tokens[4]["dep"], "ROOT");
    assert_eq!(tokens[4]["head"], 4);
    assert_eq!(tokens[4]["lemma"], "jump");
    assert_eq!(tokens[0]["is_stop"], true);
    assert_eq!(tokens[0]["is_sent_start"], true);
    assert_eq!(tokens[1]["is_sent_start"], false);
}

#[test]
fn nlp_projects_entities() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["tagger", "ner"]);
    let out = bin(&cache)
        .args(["nlp", "Acme Corp ships today.", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    let ents = report["ents"].as_array().unwrap();
    assert_eq!(ents.len(), 1);
    assert_eq!(ents[0]["text"], "Acme Corp");
    assert_eq!(ents[0]["start"], 0);
    assert_eq!(ents[0]["end"], 2);
    assert_eq!(ents[0]["label"], "ORG");

    let tokens = report["tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["ent_iob"], "B");
    assert_eq!(tokens[0]["ent_type"], "ORG");
    assert_eq!(tokens[1]["ent_iob"], "I");
    assert_eq!(tokens[2]["ent_iob"], "O");
    assert_eq!(tokens[2]["ent_type"], "");
}

#[test]
fn nlp_sentencizer_projects_sentences() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["sentencizer"]);
    let out = bin(&cache)
        .args(["nlp", "One here. Two there.", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = json_line(&out.stdout);
    assert_eq!(report["doc"]["is_sentenced"], true);
    assert_eq!(report["doc"]["is_tagged"], false);
    let sents = report["sents"].as_array().unwrap();
    assert_eq!(sents.len(), 2);
    assert_eq!(sents[0]["text"], "One here.");
    assert_eq!(sents[1]["text"], "Two there.");
    assert_eq!(sents[1]["tokens"].as_array().unwrap()[0]["text"], "Two");
}

#[test]
fn nlp_missing_operands_fail() {
    let cache = tempdir();
    let out = bin(&cache).arg("nlp").output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let out = bin(&cache).args(["nlp", "some text"]).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

// ── download_model ──────────────────────────────────────────────────

#[test]
fn download_installed_package_is_a_noop() {
    let cache = tempdir();
    install_package(&cache, "en-core-tiny", &["tagger"]);
    // the registry address is dead; exit 0 proves no fetch was attempted
    let out = bin(&cache)
        .args(["download_model", "en-core-tiny"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn download_unknown_package_fails_without_output() {
    let cache = tempdir();
    let out = bin(&cache)
        .args(["download_model", "no-such-package"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no-such-package"));
}

#[test]
fn download_failure_leaves_no_package_behind() {
    let cache = tempdir();
    let out = bin(&cache)
        .args(["download_model", "no-such-package"])
        .output()
        .unwrap();
    assert!(!out.status.success());

    // a later load must still see the package as missing
    let out = bin(&cache)
        .args(["load", "no-such-package"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
