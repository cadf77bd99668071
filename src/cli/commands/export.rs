use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let month = date::resolve_period(period)?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let written =
            ExportLogic::export(&mut pool, &cfg.settings(), format, file, month, *force)?;

        if written > 0 {
            ttlog(
                &pool.conn,
                "export",
                format.as_str(),
                &format!(
                    "Exported {} days of {}-{:02} to {}",
                    written,
                    month.0,
                    month.1 + 1,
                    file
                ),
            )?;
        }
    }
    Ok(())
}
