//! Application settings and path constants.

use std::path::PathBuf;


/// File name of the usage log.
pub const DATA_FILE_NAME: &str = "water-usage.json";

/// Directory used under the local data dir when the executable path is unknown.
pub const FALLBACK_DIR_NAME: &str = "water-log";

/// Average daily usage for the local area, in litres.
pub const DEFAULT_LOCAL_BASELINE_LITRES: f64 = 150.0;

/// Average daily usage worldwide, in litres.
pub const DEFAULT_GLOBAL_BASELINE_LITRES: f64 = 173.0;


/// Baselines the daily report compares against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    pub local_baseline_litres: f64,
    pub global_baseline_litres: f64,
}


impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            local_baseline_litres: DEFAULT_LOCAL_BASELINE_LITRES,
            global_baseline_litres: DEFAULT_GLOBAL_BASELINE_LITRES,
        }
    }
}


/// Get the default data file path.
///
/// The log lives next to the executable. If the executable path can't be
/// resolved, the user's local data directory is used instead.
pub fn get_data_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));

    match exe_dir {
        Some(dir) => dir.join(DATA_FILE_NAME),
        None => fallback_data_path(),
    }
}


fn fallback_data_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(FALLBACK_DIR_NAME)
        .join(DATA_FILE_NAME)
}
