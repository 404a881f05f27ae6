use std::fs;
use std::path::PathBuf;

use confp_capability::catalog::{names, CHAIN_CONFIGURATOR, NETWORK_IDENTITY};
use confp_cli::commands::{convert_document, load, run_convert, run_diff, run_forks};
use confp_cli::{CliError, OutputFormat, ReconcileConfig};
use confp_schemas::SchemaKind;
use confp_test_utils::{classic_coregeth_json, stureby_geth_json, stureby_parity_json};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_convert_parity_to_coregeth() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stureby.json", &stureby_parity_json());
    let config = ReconcileConfig::new().with_interface(&CHAIN_CONFIGURATOR);

    let out = run_convert(&config, SchemaKind::Parity, SchemaKind::CoreGeth, &input).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["networkId"], serde_json::json!(314_158));
    assert_eq!(json["eip161FBlock"], serde_json::json!(23_000));
}

#[test]
fn test_convert_to_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "classic.json", &classic_coregeth_json());
    let config = ReconcileConfig::new()
        .with_interface(&NETWORK_IDENTITY)
        .with_output(OutputFormat::Yaml);

    let out = run_convert(&config, SchemaKind::CoreGeth, SchemaKind::GoEthereum, &input).unwrap();
    assert_eq!(out.trim(), "networkId: 1");
}

#[test]
fn test_strict_conversion_reports_lossy_bundles() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "classic.json", &classic_coregeth_json());
    let src = load(SchemaKind::CoreGeth, &input).unwrap();

    let lenient = ReconcileConfig::new();
    assert!(convert_document(&lenient, src.as_ref(), SchemaKind::GoEthereum).is_ok());

    // classic splits the EIP-158 bundle: EIP160 at 3.0M, EIP161 at 8.772M
    let strict = ReconcileConfig::new().with_strict(true);
    let err = convert_document(&strict, src.as_ref(), SchemaKind::GoEthereum).unwrap_err();
    let mismatch = err.downcast_ref::<CliError>().unwrap();
    assert!(matches!(mismatch, CliError::Mismatch { .. }));
    assert!(mismatch.to_string().contains("EIP16"));
}

#[test]
fn test_diff_between_schemas() {
    let dir = TempDir::new().unwrap();
    let geth = write(&dir, "geth.json", &stureby_geth_json());
    let parity = write(&dir, "parity.json", &stureby_parity_json());
    let config = ReconcileConfig::new().with_interface(&NETWORK_IDENTITY);

    let out = run_diff(
        &config,
        (SchemaKind::GoEthereum, geth.as_path()),
        (SchemaKind::Parity, parity.as_path()),
    )
    .unwrap();
    assert_eq!(out, "no differences\n");

    let config = config.with_interface_name("ChainConfigurator").unwrap();
    let out = run_diff(
        &config,
        (SchemaKind::GoEthereum, geth.as_path()),
        (SchemaKind::Parity, parity.as_path()),
    )
    .unwrap();
    // parity carries parameters geth has no place for
    assert!(out.contains("MaxCodeSize: <absent> != 24576"));
}

#[test]
fn test_forks_schedule() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "geth.json", &stureby_geth_json());
    let out = run_forks(SchemaKind::GoEthereum, &input).unwrap();
    let first = out.lines().next().unwrap();
    assert!(first.trim_start().starts_with("10000"));
    assert!(first.contains(names::EIP7));
    assert!(out.lines().any(|l| l.contains(names::EIP2200)));
}

#[test]
fn test_missing_and_malformed_inputs() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(load(SchemaKind::Parity, &missing).is_err());

    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "params: [").unwrap();
    let err = load(SchemaKind::Parity, &bad).unwrap_err();
    assert!(err.to_string().contains("as parity"));
}
