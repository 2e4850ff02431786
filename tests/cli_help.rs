mod common;

use std::process::Command;

use common::*;

#[test]
fn test_help_lists_subcommands() {
    let bin = env!("CARGO_BIN_EXE_depwatch");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("watch"), "help should list watch:\n{}", stdout);
    assert!(stdout.contains("deps"), "help should list deps:\n{}", stdout);
}

#[test]
fn test_watch_missing_entrypoint_fails_before_watching() {
    let project = TestProject::new();

    let output = project.run(&["watch", "missing.toit", "--json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no such file or directory: 'missing.toit'"),
        "stderr:\n{}",
        stderr
    );
    assert!(
        !String::from_utf8_lossy(&output.stdout).contains("watch_started"),
        "nothing should be watched"
    );
}

#[test]
fn test_watch_directory_entrypoint_is_rejected() {
    let project = TestProject::new();

    let output = project.run(&["watch", "lib"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't watch directory: 'lib'"), "stderr:\n{}", stderr);
}

#[test]
fn test_invalid_config_is_reported() {
    let project = TestProject::new();
    project.write("broken.toml", "[watch\n");

    let output = project.run(&["--config", "broken.toml", "deps", "main.toit"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr:\n{}", stderr);
}

#[cfg(unix)]
#[test]
fn test_deps_json_lists_closure() {
    let project = TestProject::new();

    let output = project.run(&["deps", "main.toit", "--json"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.starts_with('{'))
        .unwrap_or_else(|| panic!("no JSON in:\n{}", stdout));
    let value: serde_json::Value = serde_json::from_str(line).unwrap();

    assert_eq!(value["command"], "deps");
    assert_eq!(value["paths"].as_array().unwrap().len(), 2);
    assert_eq!(value["directories"].as_array().unwrap().len(), 2);
    assert_eq!(value["fell_back"], false);
}

#[cfg(unix)]
#[test]
fn test_deps_fails_when_analyzer_fails() {
    let project = TestProject::new();
    project.write_failing_analyzer();

    let output = project.run(&["deps", "main.toit"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't analyze 'main.toit'"), "stderr:\n{}", stderr);
}

#[cfg(unix)]
#[test]
fn test_unknown_config_key_warns() {
    let project = TestProject::new();
    let config = std::fs::read_to_string(project.path("depwatch.toml")).unwrap();
    project.write("depwatch.toml", &format!("{}\n[output]\ncolour = \"never\"\n", config));

    let output = project.run(&["deps", "main.toit"]);

    assert!(output.status.success(), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown config key 'colour'"), "stderr:\n{}", stderr);
    assert!(stderr.contains("Did you mean 'color'?"), "stderr:\n{}", stderr);
}
