//! Log command - record the day's usage and print the comparisons.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::config::ReportConfig;
use crate::input::prompt_for_litres;
use crate::reporting::{daily_comparison, weekly_change};
use crate::storage::EntryStore;


/// Everything one logging run needs.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub data_path: PathBuf,
    pub date: NaiveDate,
    pub config: ReportConfig,
}


/// Run the log command against stdin and stdout.
pub fn run(options: &LogOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(options, &mut stdin.lock(), &mut stdout.lock())
}


/// Run the log command with explicit input and output streams.
pub fn run_with<R: BufRead, W: Write>(
    options: &LogOptions,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let store = EntryStore::new(&options.data_path);
    debug!(path = %store.path().display(), date = %options.date, "logging usage");
    store.ensure_exists()?;

    let amount = prompt_for_litres(input, output)?;
    let record = store.upsert(options.date, amount)?;

    writeln!(output)?;
    writeln!(
        output,
        "\x1b[32mSaved {} L for {}.\x1b[0m",
        record.amount,
        record.date_key()
    )?;
    writeln!(output, "{}", daily_comparison(record.amount, &options.config))?;

    if let Some(summary) = weekly_change(options.date, &store.load())? {
        writeln!(output)?;
        writeln!(output, "\x1b[1m\x1b[36mWeekly summary\x1b[0m")?;
        writeln!(output, "{summary}")?;
    }

    Ok(())
}
