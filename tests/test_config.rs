// CLASSIFICATION: COMMUNITY
// Filename: test_config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::tempdir;
use termfolio::config::{
    ConfigError, TermConfig, CONFIG_ENV, DATA_DIR_ENV, DOWNLOAD_DIR_ENV, THEME_ENV,
};
use termfolio::shell::Theme;

fn clear_env() {
    for key in [CONFIG_ENV, DATA_DIR_ENV, DOWNLOAD_DIR_ENV, THEME_ENV] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    clear_env();
    let cfg = TermConfig::resolve(None).unwrap();
    assert_eq!(cfg, TermConfig::default());
    assert_eq!(cfg.typing_speed_ms, 50);
    assert_eq!(cfg.theme, Theme::Dark);
    assert!(!cfg.sound);
    assert!(cfg.welcome);
    assert_eq!(cfg.download_dir, PathBuf::from("./downloads"));
}

#[test]
#[serial]
fn file_values_and_relative_paths() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("termfolio.toml");
    fs::write(
        &path,
        r#"
data_dir = "content"
download_dir = "/srv/downloads"
typing_speed_ms = 20
theme = "light"
sound = true
prompt = "guest$ "
"#,
    )
    .unwrap();

    let cfg = TermConfig::resolve(Some(&path)).unwrap();
    assert_eq!(cfg.data_dir, Some(dir.path().join("content")));
    assert_eq!(cfg.download_dir, PathBuf::from("/srv/downloads"));
    assert_eq!(cfg.typing_speed_ms, 20);
    assert_eq!(cfg.theme, Theme::Light);
    assert!(cfg.sound);
    assert_eq!(cfg.terminal_options().prompt.as_deref(), Some("guest$ "));
}

#[test]
#[serial]
fn env_beats_file() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("termfolio.toml");
    fs::write(&path, "theme = \"light\"\n").unwrap();
    std::env::set_var(CONFIG_ENV, &path);
    std::env::set_var(THEME_ENV, "dark");
    std::env::set_var(DATA_DIR_ENV, "/opt/portfolio");

    let cfg = TermConfig::resolve(None).unwrap();
    clear_env();
    assert_eq!(cfg.theme, Theme::Dark);
    assert_eq!(cfg.data_dir, Some(PathBuf::from("/opt/portfolio")));
}

#[test]
#[serial]
fn unknown_keys_and_bad_files_fail() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "colour = \"green\"\n").unwrap();
    assert!(matches!(
        TermConfig::resolve(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        TermConfig::resolve(Some(&dir.path().join("missing.toml"))),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
#[serial]
fn slow_typing_speed_in_file_is_rejected() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("termfolio.toml");
    fs::write(&path, "typing_speed_ms = 60000\n").unwrap();
    match TermConfig::resolve(Some(&path)) {
        Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "typing_speed_ms"),
        other => panic!("expected invalid typing speed, got {:?}", other),
    }
}
