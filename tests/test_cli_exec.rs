// CLASSIFICATION: COMMUNITY
// Filename: test_cli_exec.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

mod common;

use std::path::Path;
use std::process::Command;

use common::terminal;
use tempfile::tempdir;
use termfolio::cli::exec_script;
use termfolio::download::Downloader;

fn script(cmds: &[&str]) -> Vec<String> {
    cmds.iter().map(|c| c.to_string()).collect()
}

fn exec(cmds: &[&str], downloads: &Path) -> String {
    let mut term = terminal();
    let mut out = Vec::new();
    exec_script(&mut term, &script(cmds), &Downloader::new(downloads), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_only_appended_lines() {
    let dir = tempdir().unwrap();
    let out = exec(&["cd projects", "ls", "xyz"], dir.path());
    assert_eq!(
        out,
        "> cd projects\n> ls\namazon_reviews airbnb iveims blogai quantiq\n> xyz\nxyz: command not found\n"
    );
}

#[test]
fn modals_are_described_and_closed() {
    let dir = tempdir().unwrap();
    let out = exec(&["analyze", "help"], dir.path());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "> analyze");
    assert_eq!(lines[1], "[text] Analyze");
    assert_eq!(lines[3], "> help");
}

#[test]
fn clear_and_about_print_fresh_output() {
    let dir = tempdir().unwrap();
    let out = exec(&["help", "clear", "open about.txt"], dir.path());
    assert!(out.ends_with("Target Roles:\nData Scientist\nFullstack Engineer\nMachine Learning Engineer\n"));
    assert!(out.contains("\nAlex Kimani\n"));
}

#[test]
fn exit_stops_the_script() {
    let dir = tempdir().unwrap();
    let out = exec(&["exit", "help"], dir.path());
    assert_eq!(out, "> exit\n");
}

#[test]
fn downloads_land_in_the_target_dir() {
    let dir = tempdir().unwrap();
    exec(&["downloadcv"], dir.path());
    assert!(dir.path().join("Alex_Kimani_CV.pdf").is_file());
}

#[test]
fn binary_runs_exec_mode() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_termfolio"))
        .args(["--exec", "theme", "--exec", "education", "--seed", "1"])
        .env_remove("TERMFOLIO_CONFIG")
        .env("TERMFOLIO_DOWNLOAD_DIR", dir.path())
        .output()
        .expect("run termfolio");
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "> theme\nTheme switched to light mode.\n> education\n\
         BSc Computer Science - University of Nairobi (2018 - 2022)\n\
         Data Science Nanodegree - Udacity (2023)\n"
    );
}

#[test]
fn binary_reports_bad_config() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_termfolio"))
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--exec", "ls"])
        .output()
        .expect("run termfolio");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}
