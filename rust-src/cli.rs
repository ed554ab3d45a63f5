//! CLI definitions using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::commands::log::{self, LogOptions};
use crate::config::{
    get_data_path,
    ReportConfig,
    DEFAULT_GLOBAL_BASELINE_LITRES,
    DEFAULT_LOCAL_BASELINE_LITRES,
};


/// Water Log - record daily water usage and compare it with typical averages
#[derive(Parser, Debug)]
#[command(name = "wlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log usage for this day instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Usage log file [default: water-usage.json next to the executable]
    #[arg(long, env = "WLOG_DATA_FILE", value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Local average daily usage, in litres
    #[arg(
        long,
        env = "WLOG_LOCAL_BASELINE",
        value_name = "LITRES",
        default_value_t = DEFAULT_LOCAL_BASELINE_LITRES
    )]
    local_baseline: f64,

    /// Global average daily usage, in litres
    #[arg(
        long,
        env = "WLOG_GLOBAL_BASELINE",
        value_name = "LITRES",
        default_value_t = DEFAULT_GLOBAL_BASELINE_LITRES
    )]
    global_baseline: f64,
}


impl Cli {
    fn into_log_options(self) -> LogOptions {
        LogOptions {
            data_path: self.data_file.unwrap_or_else(get_data_path),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            config: ReportConfig {
                local_baseline_litres: self.local_baseline,
                global_baseline_litres: self.global_baseline,
            },
        }
    }
}


/// Parse arguments, dropping any that aren't recognized.
///
/// Help, version and malformed values for known flags exit the way clap does.
fn parse_lenient(mut args: Vec<OsString>) -> Cli {
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return cli,
            Err(err) => err,
        };

        if err.kind() != ErrorKind::UnknownArgument {
            err.exit();
        }

        let Some(ContextValue::String(unknown)) = err.get(ContextKind::InvalidArg) else {
            err.exit();
        };

        let Some(index) = unknown_position(&args, unknown) else {
            err.exit();
        };

        let dropped = args.remove(index);
        debug!(argument = ?dropped, "ignoring unrecognized argument");
    }
}


/// Index of the argument clap reported as `unknown`.
///
/// Values that belong to a known flag are stepped over, so only the argument
/// clap actually tripped on is picked. A reported short flag such as `-x`
/// matches the whole bundle it came from (`-xyz`).
fn unknown_position(args: &[OsString], unknown: &str) -> Option<usize> {
    let command = Cli::command();
    let short = unknown.len() == 2 && unknown.starts_with('-') && unknown != "--";
    let with_value = format!("{unknown}=");
    let mut after_separator = false;

    let mut index = 1;
    while index < args.len() {
        let Some(arg) = args[index].to_str() else {
            index += 1;
            continue;
        };

        if after_separator {
            if arg == unknown {
                return Some(index);
            }
        } else if arg == "--" {
            after_separator = true;
        } else if arg == unknown
            || arg.starts_with(&with_value)
            || (short && !arg.starts_with("--") && arg.starts_with(unknown))
        {
            return Some(index);
        } else if takes_separate_value(&command, arg) {
            index += 1;
        }

        index += 1;
    }

    None
}


/// Whether `arg` is a known long flag whose value is the next argument.
fn takes_separate_value(command: &clap::Command, arg: &str) -> bool {
    let Some(long) = arg.strip_prefix("--") else {
        return false;
    };
    if long.contains('=') {
        return false;
    }

    command
        .get_arguments()
        .any(|a| a.get_long() == Some(long) && a.get_action().takes_values())
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = parse_lenient(std::env::args_os().collect());
    debug!(?cli, "parsed arguments");

    log::run(&cli.into_log_options())
}
