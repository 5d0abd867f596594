use assert_cmd::Command;
use predicates::prelude::*;

fn write_catalog(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("PACKAGES.md");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn prints_the_parsed_catalog_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        "# Core\n- [VueRouter](https://github.com/vuejs/vue-router) vue:2,3 status:stable\n",
    );

    Command::cargo_bin("vue-curated-cli")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("github_com::vuejs::vue-router"))
        .stdout(predicate::str::contains("\"repoName\": \"vue-router\""))
        .stdout(predicate::str::contains("\"label\": \"Vue 2\""));
}

#[test]
fn fails_on_a_module_before_any_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "- [Vuex](https://github.com/vuejs/vuex) vue:2\n");

    Command::cargo_bin("vue-curated-cli")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("before any category heading"));
}

#[test]
fn fails_on_a_missing_file() {
    Command::cargo_bin("vue-curated-cli")
        .unwrap()
        .arg("/no/such/PACKAGES.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog file"));
}

#[test]
fn prints_usage_without_arguments() {
    Command::cargo_bin("vue-curated-cli")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}
