//! Tests for loading configuration files and running with them.

use std::io::Write;
use strictly_hanoi_cli::{HanoiConfig, OutputFormat, StackOrder, run};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    file.write_all(content.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
        peg_names = ["Left", "Middle", "Right"]
        divider = "----"
        separator = ","
        order = "top-to-bottom"
        max_disk_count = 10
        "#,
    );

    let config = HanoiConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(config.peg_name_refs(), ["Left", "Middle", "Right"]);
    assert_eq!(config.divider(), "----");
    assert_eq!(*config.order(), StackOrder::TopToBottom);
    assert_eq!(*config.max_disk_count(), 10);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let result = HanoiConfig::from_file(dir.path().join("missing.toml"));
    assert!(result.unwrap_err().message.contains("Failed to read"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("peg_names = 3");
    let result = HanoiConfig::from_file(file.path());
    assert!(result.unwrap_err().message.contains("Failed to parse"));
}

#[test]
fn test_run_with_custom_config() {
    let file = write_config(
        r#"
        peg_names = ["Left", "Middle", "Right"]
        divider = "----"
        separator = ","
        order = "top-to-bottom"
        "#,
    );
    let config = HanoiConfig::from_file(file.path()).expect("Valid config");
    let mut out = Vec::new();

    let summary = run(2, &config, OutputFormat::Text, true, &mut out).expect("Solved");

    assert_eq!(summary.relocations, 3);
    let text = String::from_utf8(out).expect("UTF-8 output");
    assert_eq!(
        text,
        "----\nLeft: 1,2\nMiddle: \nRight: \n----\nLeft: \nMiddle: \nRight: 1,2\n"
    );
}

#[test]
fn test_run_respects_disk_limit() {
    let file = write_config("max_disk_count = 2");
    let config = HanoiConfig::from_file(file.path()).expect("Valid config");
    let mut out = Vec::new();

    let result = run(3, &config, OutputFormat::Text, false, &mut out);

    assert!(result.is_err());
}
