use crate::errors::{AppError, AppResult};
use crate::models::settings::{
    DEFAULT_CURRENCY, DEFAULT_EXPECTED_START, DEFAULT_HOURLY_RATE, Settings,
};
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// "HH:MM"; an empty string disables lateness tracking.
    #[serde(default = "default_expected_start")]
    pub expected_start_time: String,
}

fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}
fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
fn default_expected_start() -> String {
    DEFAULT_EXPECTED_START.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            hourly_rate: default_hourly_rate(),
            currency: default_currency(),
            expected_start_time: default_expected_start(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rworkflow")
        } else {
            base.join(".rworkflow")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkflow.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkflow.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist yet.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// The immutable settings snapshot handed to the calculation engine.
    pub fn settings(&self) -> Settings {
        Settings {
            hourly_rate: self.hourly_rate,
            currency: self.currency.clone(),
            expected_start_time: TimeOfDay::parse(&self.expected_start_time),
        }
    }

    /// Apply `config --set-*` updates. Only the given fields change.
    pub fn apply_settings(
        &mut self,
        rate: Option<f64>,
        currency: Option<&str>,
        start: Option<&str>,
    ) -> AppResult<()> {
        if let Some(r) = rate {
            if !r.is_finite() {
                return Err(AppError::Config(format!("hourly rate must be a number: {r}")));
            }
            self.hourly_rate = r;
        }
        if let Some(c) = currency {
            let code = c.trim().to_uppercase();
            if code.is_empty() {
                return Err(AppError::Config("currency code cannot be empty".into()));
            }
            self.currency = code;
        }
        if let Some(s) = start {
            self.expected_start_time = s.trim().to_string();
        }
        Ok(())
    }

    /// Initialize configuration and database files.
    /// With `is_test` the config file is left untouched.
    pub fn init_all(
        config_path: &Path,
        custom_db: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("rworkflow.sqlite"),
        };

        let mut cfg = Self::load_from(config_path)?;
        cfg.database = db_path.to_string_lossy().to_string();

        if !is_test {
            cfg.save_to(config_path)?;
            success(format!("Config file: {}", config_path.display()));
        }

        Ok(cfg)
    }
}
