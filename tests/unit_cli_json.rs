#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

#[test]
fn inspect_json_output_lists_container_entries() {
	let path = write_record(
		"inspect",
		r#"{"debug": null, "type": 3, "hosts": ["a", "b"], "child": {"x": 1}}"#,
	);

	let json = run_json(vec!["inspect".to_owned(), path.display().to_string(), "--json".to_owned()]);
	std::fs::remove_file(&path).expect("fixture removed");

	assert_eq!(json["entry_count"], 4);
	let entries = json["entries"].as_array().expect("entries array");

	let tag_of = |name: &str| {
		entries
			.iter()
			.find(|entry| entry["name"] == name)
			.unwrap_or_else(|| panic!("entry {name} present"))["tag"]
			.clone()
	};
	assert_eq!(tag_of("debug"), "boolean");
	assert_eq!(tag_of("type"), "uint32");
	assert_eq!(tag_of("hosts"), "string_array");
	assert_eq!(tag_of("child"), "nvlist");
}

#[test]
fn roundtrip_output_shows_width_tagged_integers() {
	let path = write_record("roundtrip", r#"{"rewind-request": 5, "other": 5, "flag": true}"#);

	let json = run_json(vec![
		"roundtrip".to_owned(),
		path.display().to_string(),
		"--compact".to_owned(),
	]);
	std::fs::remove_file(&path).expect("fixture removed");

	assert_eq!(json["rewind-request"]["$uint32"], 5);
	assert_eq!(json["other"]["$uint64"], 5);
	assert_eq!(json["flag"], true);
}

#[test]
fn width_command_resolves_table_and_default() {
	let output = Command::new(env!("CARGO_BIN_EXE_nvrec"))
		.args(["width", "type", "somewhere-else"])
		.output()
		.expect("command executes");

	assert!(output.status.success(), "command should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	let lines: Vec<_> = stdout.lines().collect();
	assert_eq!(lines, ["type: uint32", "somewhere-else: uint64"]);
}

#[test]
fn invalid_record_json_fails_with_error() {
	let path = write_record("invalid", r#"{"ratio": 1.25}"#);

	let output = Command::new(env!("CARGO_BIN_EXE_nvrec"))
		.args(["inspect", path.to_str().expect("utf8 path")])
		.output()
		.expect("command executes");
	std::fs::remove_file(&path).expect("fixture removed");

	assert!(!output.status.success(), "command should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid record json"), "stderr was: {stderr}");
}

fn run_json(args: Vec<String>) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_nvrec")).args(&args).output().expect("command executes");

	assert!(output.status.success(), "command should succeed");
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn write_record(label: &str, body: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("nvrec_cli_{label}_{}.json", std::process::id()));
	std::fs::write(&path, body).expect("fixture written");
	path
}
