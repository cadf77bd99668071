use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &mut Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        rate,
        currency,
        start,
    } = cmd
    {
        if rate.is_some() || currency.is_some() || start.is_some() {
            ConfigLogic::set(
                config_path,
                cfg,
                *rate,
                currency.as_deref(),
                start.as_deref(),
            )?;
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(config_path, editor)?;
        }
    }

    Ok(())
}
