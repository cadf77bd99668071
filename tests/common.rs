#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwf() -> Command {
    cargo_bin_cmd!("rworkflow")
}

/// Paths used by one test: a fresh DB and a fresh config file in the temp dir.
pub struct TestEnv {
    pub db: String,
    pub config: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let db = temp_path(&format!("{name}_rworkflow"), "sqlite");
        let config = temp_path(&format!("{name}_rworkflow"), "conf");
        Self { db, config }
    }

    /// Command pre-filled with `--db` and `--config`.
    pub fn cmd(&self) -> Command {
        let mut c = rwf();
        c.args(["--db", &self.db, "--config", &self.config]);
        c
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add_day(&self, date: &str, time_in: &str, break_start: &str, break_end: &str, out: &str) {
        self.cmd()
            .args([
                "add",
                date,
                "--in",
                time_in,
                "--break-start",
                break_start,
                "--break-end",
                break_end,
                "--out",
                out,
            ])
            .assert()
            .success();
    }
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialized DB with two 7.5h days in September 2025.
pub fn init_db_with_data(name: &str) -> TestEnv {
    let env = TestEnv::new(name);
    env.init();
    env.add_day("2025-09-01", "09:00", "12:00", "12:30", "17:00");
    env.add_day("2025-09-15", "09:00", "12:00", "12:30", "17:00");
    env
}
