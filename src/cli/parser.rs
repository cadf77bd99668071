use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkflow
/// CLI application to track daily work hours, lateness and earnings with SQLite
#[derive(Parser)]
#[command(
    name = "rworkflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-hours tracker: clock-in/out, breaks, lateness and monthly earnings",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update on init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show, edit or update the configuration and pay settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,

        #[arg(long = "set-rate", value_name = "AMOUNT", allow_negative_numbers = true, help = "Set the hourly rate")]
        rate: Option<f64>,

        #[arg(long = "set-currency", value_name = "CODE", help = "Set the currency code (e.g. USD, EUR)")]
        currency: Option<String>,

        #[arg(
            long = "set-start",
            value_name = "HH:MM",
            help = "Set the expected start time (empty string disables lateness)"
        )]
        start: Option<String>,
    },

    /// Create or update the entry of a day
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        time_in: Option<String>,

        /// Break start (HH:MM)
        #[arg(long = "break-start", value_name = "HH:MM")]
        break_start: Option<String>,

        /// Break end (HH:MM)
        #[arg(long = "break-end", value_name = "HH:MM")]
        break_end: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM")]
        time_out: Option<String>,

        /// Clear a field: in, break-start, break-end, out (repeatable)
        #[arg(long = "clear", value_name = "FIELD")]
        clear: Vec<String>,
    },

    /// Delete the entry of a day
    Del {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List every day of a month with its figures and the monthly totals
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        period: Option<String>,
    },

    /// Show the monthly totals only
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        period: Option<String>,
    },

    /// Print the plain-text month digest used for AI summaries
    Report {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to report (default: current)")]
        period: Option<String>,
    },

    /// Export the daily figures of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
