use assert_cmd::Command;
use predicates::prelude::*;
use thesis_doc_content::thesis::REPOSITORY_LAYOUT;

fn thesis_doc(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("thesis-doc").unwrap();
    cmd.current_dir(dir).env_clear();
    cmd
}

#[test]
fn renders_html_without_config_or_environment() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Agentic AI — Thesis Project"));
}

#[test]
fn render_is_byte_identical_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    let first = thesis_doc(temp_dir.path())
        .args(["render", "--format", "markdown"])
        .output()
        .unwrap();
    let second = thesis_doc(temp_dir.path())
        .args(["render", "--format", "md"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn renders_text_with_verbatim_layout() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .args(["render", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(REPOSITORY_LAYOUT))
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn colored_text_has_escape_codes() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .args(["render", "--format", "text", "--color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn rejects_unknown_format() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .args(["render", "--format", "pdf"])
        .assert()
        .failure();
}

#[test]
fn build_writes_site() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .args(["build", "--output", "public"])
        .assert()
        .success();

    let out = temp_dir.path().join("public");
    for file in ["index.html", "thesis.md", "thesis.txt", "document.json", "assets/main.css"] {
        assert!(out.join(file).exists(), "{} missing", file);
    }
}

#[test]
fn build_honors_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("site.toml"),
        "[site]\noutput = \"out\"\n\n[build]\nformats = [\"markdown\"]\n",
    )
    .unwrap();

    thesis_doc(temp_dir.path()).arg("build").assert().success();

    let out = temp_dir.path().join("out");
    assert!(out.join("thesis.md").exists());
    assert!(!out.join("index.html").exists());
}

#[test]
fn malformed_config_fails_build() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("site.toml"), "[site\n").unwrap();

    thesis_doc(temp_dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn init_writes_config_once() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("site.toml");

    thesis_doc(temp_dir.path()).arg("init").assert().success();
    assert!(config.exists());

    std::fs::write(&config, "# edited\n").unwrap();
    thesis_doc(temp_dir.path()).arg("init").assert().success();
    assert_eq!(std::fs::read_to_string(&config).unwrap(), "# edited\n");

    thesis_doc(temp_dir.path())
        .args(["init", "--yes"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&config).unwrap().contains("[build]"));
}

#[test]
fn serve_requires_built_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    thesis_doc(temp_dir.path())
        .args(["serve", "--no-open", "--dir", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn serve_defaults_to_configured_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("site.toml"),
        "[site]\noutput = \"public\"\n",
    )
    .unwrap();

    thesis_doc(temp_dir.path())
        .args(["serve", "--no-open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found: public"));
}
