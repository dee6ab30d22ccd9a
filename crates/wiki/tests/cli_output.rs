use std::path::Path;
use std::process::Command;

struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

fn run_wiki(args: &[&str]) -> CliOutput {
    run_wiki_in(args, None)
}

fn run_wiki_in(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chilling-wiki"));
    cmd.args(args)
        .args(["--color", "never"])
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "warn");
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    let output = cmd
        .output()
        .unwrap_or_else(|_| panic!("Failed to run chilling-wiki {args:?}"));

    CliOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

#[test]
fn search_lists_matching_pages() {
    let out = run_wiki(&["search", "vein"]);
    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "1 result(s)\n  #datapacks  Datapacks\n");
}

#[test]
fn search_without_matches_succeeds() {
    let out = run_wiki(&["search", "netherite elevator"]);
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "0 result(s)\n");
}

#[test]
fn route_resolves_fragments() {
    let out = run_wiki(&["route", "#plugins~economy"]);
    assert_eq!(out.exit_code, 0);
    insta::assert_snapshot!(out.stdout.trim_end(), @"page plugins #economy (Shops & Economy)");

    let out = run_wiki(&["route", "doesnotexist"]);
    assert_eq!(out.exit_code, 0);
    insta::assert_snapshot!(out.stdout.trim_end(), @"not found doesnotexist");
}

#[test]
fn check_bundled_content() {
    let out = run_wiki(&["check"]);
    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.starts_with("The Chilling SMP\n"));
    assert!(out.stdout.trim_end().ends_with("Content OK"));
}

#[test]
fn check_rejects_invalid_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wiki.json");
    std::fs::write(
        &path,
        r#"{"site_title":"T","tagline":"t","pages":[
            {"slug":"a","title":"A","summary":""},
            {"slug":"a","title":"Again","summary":""}
        ]}"#,
    )
    .unwrap();

    let out = run_wiki(&["check", "--content", path.to_str().unwrap()]);
    assert_eq!(out.exit_code, 1);
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("Error:"), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("duplicate page slug `a`"), "stderr: {}", out.stderr);
}

#[test]
fn missing_content_file_is_an_error() {
    let out = run_wiki(&["search", "x", "--content", "does/not/exist.json"]);
    assert_eq!(out.exit_code, 1);
    assert!(out.stderr.contains("failed to load wiki content from does/not/exist.json"));
}

#[test]
fn build_writes_site_relative_to_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_wiki_in(&["build", "--out", "public"], Some(dir.path()));
    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);

    let html = std::fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(html.contains("__WIKI_DATA__"));
    assert!(dir.path().join("public/wiki.json").exists());
    assert!(out.stdout.contains("note: the page loads the viewer from ./pkg/wiki_viewer.js"));
}

#[test]
fn completion_generates_script() {
    let out = run_wiki(&["completion", "bash"]);
    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("chilling-wiki"));
}
