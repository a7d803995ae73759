use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tiddly2md_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tiddly2md").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a CSV export into `dir` and return its path
pub fn write_export(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("tiddlers.csv");
    fs::write(&path, content).unwrap();
    path
}
