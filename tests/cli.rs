//! Integration tests for the repo-ref binary.
//!
//! Each command runs with an isolated HOME so user config files and the
//! strict-mode environment toggle never leak into results.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command for running repo-ref with a clean environment.
fn repo_ref(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repo-ref").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env_remove("REPO_REF_CONFIG")
        .env_remove("REPO_REF_STRICT");
    cmd
}

mod parse {
    use super::*;

    #[test]
    fn shorthand_prints_canonical_forms() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["parse", "ossf/scorecard"])
            .assert()
            .success()
            .stdout(predicate::str::contains("url: github.com/ossf/scorecard"))
            .stdout(predicate::str::contains("key: github.com-ossf-scorecard"));
    }

    #[test]
    fn json_output() {
        let home = TempDir::new().unwrap();
        let output = repo_ref(&home)
            .args(["parse", "github.com/ossf/scorecard", "--json", "-m", "ci"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["kind"], "url");
        assert_eq!(json["locator"]["owner"], "ossf");
        assert_eq!(json["metadata"][0], "ci");
    }

    #[test]
    fn single_word_fails() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["parse", "onlyoneword"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error: invalid repository reference 'onlyoneword'"));
    }

    #[test]
    fn strict_flag_rejects_shorthand() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["--strict", "parse", "ossf/scorecard"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("https:// or file://"));
    }

    #[test]
    fn strict_env_toggle_rejects_shorthand() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .env("REPO_REF_STRICT", "")
            .args(["parse", "ossf/scorecard"])
            .assert()
            .failure();
    }

    #[test]
    fn strict_file_url_is_local() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["--strict", "parse", "file:///tmp/x"])
            .assert()
            .success()
            .stdout(predicate::str::contains("kind: local directory"))
            .stdout(predicate::str::contains("path: /tmp/x"));
    }

    #[test]
    fn validate_flag_rejects_bad_owner() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["parse", "foo--bar/repo", "--validate"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid GitHub username: foo--bar"));
    }

    #[test]
    fn debug_reports_mode() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["--debug", "parse", "a/b"])
            .assert()
            .success()
            .stderr(predicate::str::contains("[debug] parse mode: legacy"));
    }

    #[test]
    fn quiet_suppresses_text() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["-q", "parse", "a/b"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

mod validate {
    use super::*;

    #[test]
    fn accepts_valid_reference() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["validate", "https://github.com/foo-bar/baz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: github.com/foo-bar/baz"));
    }

    #[test]
    fn rejects_unsupported_host() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["validate", "gitlab.com/foo/bar"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported host: gitlab.com"));
    }

    #[test]
    fn rejects_leading_hyphen() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["validate", "--", "-foo/bar"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid GitHub username: -foo"));
    }

    #[test]
    fn local_reference_is_wrong_type() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["--strict", "validate", "file:///tmp/x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid repository type"));
    }
}

mod compare {
    use super::*;

    #[test]
    fn shorthand_equals_host_qualified() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["compare", "github.com/A/B", "A/B"])
            .assert()
            .success()
            .stdout("equal\n");
    }

    #[test]
    fn metadata_is_a_set() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["compare", "a/b", "a/b"])
            .args(["--metadata-a", "x", "--metadata-a", "y"])
            .args(["--metadata-b", "y", "--metadata-b", "x", "--metadata-b", "x"])
            .assert()
            .success()
            .stdout("equal\n");
    }

    #[test]
    fn missing_tag_differs() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["compare", "a/b", "a/b"])
            .args(["--metadata-a", "x", "--metadata-a", "y", "--metadata-b", "x"])
            .assert()
            .success()
            .stdout("different\n");
    }

    #[test]
    fn names_the_failing_side() {
        let home = TempDir::new().unwrap();
        repo_ref(&home)
            .args(["compare", "a/b", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("second reference 'nope'"));
    }
}

mod local {
    use super::*;

    #[test]
    fn existing_directory() {
        let home = TempDir::new().unwrap();
        let dir = home.path().to_str().unwrap().to_string();
        repo_ref(&home)
            .args(["local", &dir])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("path: {}", dir)))
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn missing_directory_warns() {
        let home = TempDir::new().unwrap();
        let missing = home.path().join("missing");
        repo_ref(&home)
            .args(["local", missing.to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains("warning:"));
    }
}

mod config {
    use super::*;

    #[test]
    fn config_metadata_is_applied() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("custom.toml");
        std::fs::write(&path, "metadata = [\"nightly\"]\n").unwrap();

        repo_ref(&home)
            .args(["--config", path.to_str().unwrap(), "parse", "a/b"])
            .assert()
            .success()
            .stdout(predicate::str::contains("metadata: nightly"));
    }

    #[test]
    fn config_from_home_enables_strict() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(".repo-ref");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "strict = true\n").unwrap();

        repo_ref(&home)
            .args(["parse", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("https:// or file://"));
    }

    #[test]
    fn config_validate_applies() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("custom.toml");
        std::fs::write(&path, "validate = true\n").unwrap();

        repo_ref(&home)
            .args(["--config", path.to_str().unwrap(), "parse", "gitlab.com/a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported host"));
    }

    #[test]
    fn malformed_config_fails() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("bad.toml");
        std::fs::write(&path, "unknown_key = 1\n").unwrap();

        repo_ref(&home)
            .args(["--config", path.to_str().unwrap(), "parse", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    repo_ref(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-ref"));
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    repo_ref(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-ref"));
}
