use super::helpers::{TestProject, HEADER_LINE};

#[test]
fn test_clean_tree_reports_count_and_succeeds() {
    let project = TestProject::new();
    project.write_file("src/a.py", &format!("{}\nprint('hi')\n", HEADER_LINE));
    project.write_file("test/test_a.py", &format!("{}\n", HEADER_LINE));

    let output = project.run(&["check", "."]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("checked 2 files successfully."));
}

#[test]
fn test_missing_headers_listed_in_one_shot() {
    let project = TestProject::new();
    project.write_file("src/a.py", &format!("{}\n", HEADER_LINE));
    project.write_file("src/b.py", "import os\n\nx = 1\ny = 2\nz = 3\n");
    project.write_file(
        "src/_version.py",
        "# coding: utf-8\n# file generated by setuptools_scm\nversion = '1.2.3'\n",
    );

    let output = project.run(&["check", "."]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("checked 3 files successfully."));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Copyright headers are missing from files:"));
    assert!(stderr.contains("b.py"));
    assert!(!stderr.contains("a.py\""));
    assert!(!stderr.contains("_version.py"));
}

#[test]
fn test_empty_shell_script_fails() {
    let project = TestProject::new();
    project.write_file("scripts/c.sh", "");

    let output = project.run(&["check", "."]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("c.sh"));
}

#[test]
fn test_exit_zero_keeps_failure_message() {
    let project = TestProject::new();
    project.write_file("src/b.py", "x = 1\n");

    let output = project.run(&["check", ".", "--exit-zero"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Copyright headers are missing from files:"));
}

#[test]
fn test_root_discovered_from_nested_directory() {
    let project = TestProject::new();
    project.write_file("test/test_a.py", &format!("{}\n", HEADER_LINE));
    project.write_file("src/pkg/deep/mod.py", &format!("{}\n", HEADER_LINE));

    // No path argument: the checker walks upward until it finds the
    // directory containing 'test'.
    let nested = project.path().join("src").join("pkg").join("deep");
    let output = project.run_in(&nested, &["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("checked 2 files successfully."));
}

#[test]
fn test_json_format() {
    let project = TestProject::new();
    project.write_file("src/a.py", &format!("{}\n", HEADER_LINE));

    let output = project.run(&["check", ".", "--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("files_checked"));
    assert!(stdout.contains("failing"));
}

#[test]
fn test_verbose_lists_scanned_files() {
    let project = TestProject::new();
    project.write_file("src/a.py", &format!("{}\n", HEADER_LINE));

    let output = project.run(&["check", ".", "--verbose"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.py"));
}

#[test]
fn test_init_then_validate() {
    let project = TestProject::new();
    project.write_file("pyproject.toml", "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n");

    let init_output = project.run(&["init"]);
    assert!(init_output.status.success());

    let content = std::fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert!(content.contains("tool.py-header-auditor"));

    let validate_output = project.run(&["config", "--validate"]);
    assert!(validate_output.status.success());
    let stdout = String::from_utf8_lossy(&validate_output.stdout);
    assert!(stdout.contains("Configuration is valid"));
}

#[test]
fn test_configured_header_phrase_overrides_default() {
    let project = TestProject::new();
    project.write_file(
        "pyproject.toml",
        r#"[project]
name = "demo"
version = "0.1.0"

[tool.py-header-auditor]
header_phrase = "Copyright Example Corp. All Rights Reserved."
"#,
    );
    project.write_file(
        "src/a.py",
        "# Copyright Example Corp. All Rights Reserved.\nx = 1\n",
    );

    let output = project.run(&["check", "."]);
    assert!(output.status.success());
}
