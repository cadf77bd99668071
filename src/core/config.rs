use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file in `editor`, falling back to $EDITOR/$VISUAL and
    /// then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", requested));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", default_editor));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration with '{}'",
                default_editor
            ))),
        }
    }

    /// Update pay/schedule settings, rewrite the file and audit the change.
    pub fn set(
        path: &Path,
        cfg: &mut Config,
        rate: Option<f64>,
        currency: Option<&str>,
        start: Option<&str>,
    ) -> AppResult<()> {
        // Save what is on disk, not `cfg`: a `--db` override must not persist.
        let mut stored = Config::load_from(path)?;
        stored.apply_settings(rate, currency, start)?;
        stored.save_to(path)?;

        cfg.apply_settings(rate, currency, start)?;

        let summary = format!(
            "hourly_rate={} currency={} expected_start_time={}",
            cfg.hourly_rate,
            cfg.currency,
            if cfg.expected_start_time.is_empty() {
                "-"
            } else {
                cfg.expected_start_time.as_str()
            }
        );

        // Audit failures do not undo the settings change.
        match DbPool::open_initialized(&cfg.database) {
            Ok(pool) => {
                if let Err(e) = ttlog(&pool.conn, "config", "settings", &summary) {
                    warning(format!("Failed to write internal log: {}", e));
                }
            }
            Err(e) => warning(format!("Failed to write internal log: {}", e)),
        }

        success(format!("Settings updated: {}", summary));
        Ok(())
    }
}
