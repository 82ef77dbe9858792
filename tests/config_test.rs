// tests/config_test.rs
use serial_test::serial;
use stampver::config::{load_config, Config};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.release_branch, "release");
    assert_eq!(config.version_file, PathBuf::from("VERSION"));
    assert_eq!(config.sha_file, PathBuf::from("GIT_SHA"));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
release_branch = "stable"
version_file = "pkg/VERSION"
sha_file = "pkg/GIT_SHA"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.release_branch, "stable");
    assert_eq!(config.version_file, PathBuf::from("pkg/VERSION"));
    assert_eq!(config.sha_file, PathBuf::from("pkg/GIT_SHA"));
}

#[test]
fn test_load_from_file_with_partial_settings() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"release_branch = \"main\"")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.release_branch, "main");
    // Unset keys fall back to defaults.
    assert_eq!(config.version_file, PathBuf::from("VERSION"));
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let result = load_config(Some("/nonexistent/stampver.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"release_branch = [not toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    // load_config(None) picks up ./stampver.toml; run serially because it
    // depends on the process working directory.
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("stampver.toml"),
        "release_branch = \"production\"",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None).unwrap();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.release_branch, "production");
}
