// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

fn edmflow() -> Command {
    Command::cargo_bin("edmflow").expect("binary builds")
}

#[test]
fn emit_preset_to_stdout() {
    edmflow()
        .args(["emit", "--preset", "regression-from-aod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: ExREG"))
        .stdout(predicate::str::contains("max_events: 1000"))
        .stdout(predicate::str::contains("keep *_*_*_ExREG"));
}

#[test]
fn emit_toml_to_stdout() {
    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"ExREG\""))
        .stdout(predicate::str::contains("max_events = 1000"));
}

#[test]
fn emit_toml_then_validate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.toml");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow().arg("validate").arg(&path).assert().success();
}

#[test]
fn emit_unknown_preset_fails() {
    edmflow()
        .args(["emit", "--preset", "nosuchpreset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn emit_then_validate_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.yaml");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Descriptor is valid!"));
}

#[test]
fn emit_json_then_validate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.json");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow().arg("validate").arg(&path).assert().success();
}

#[test]
fn validate_missing_file_fails() {
    edmflow()
        .args(["validate", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn validate_reports_unknown_module() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.yaml");
    std::fs::write(
        &path,
        "name: BROKEN\n\
         source:\n  plugin: PoolSource\n  file_names: [\"file:in.root\"]\n\
         paths:\n  - name: p\n    modules: [ghost]\n",
    )
    .expect("write descriptor");

    edmflow()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown module 'ghost'"));
}

#[test]
fn graph_text_shows_schedule() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.yaml");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow()
        .arg("graph")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. kt6PFJets (FastjetJetProducer)"))
        .stdout(predicate::str::contains(
            "3. calibratedElectrons (CalibratedElectronProducer)",
        ));
}

#[test]
fn graph_mermaid_shows_dependencies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.yaml");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow()
        .args(["graph", "--format", "mermaid"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("kt6PFJets --> eleRegressionEnergy"));
}

#[test]
fn select_keeps_own_products_and_drops_upstream() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("process.yaml");

    edmflow()
        .args(["emit", "--preset", "regression-from-aod", "-o"])
        .arg(&path)
        .assert()
        .success();

    edmflow()
        .arg("select")
        .arg(&path)
        .arg("doubleMap_calibratedElectrons_eneRegForGsfEle_ExREG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("keep"));

    edmflow()
        .arg("select")
        .arg(&path)
        .arg("recoGsfElectrons_gsfElectrons__RECO")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("drop"));
}
