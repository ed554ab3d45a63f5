//! Configuration and settings for the water log.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    get_data_path,
    ReportConfig,
    DATA_FILE_NAME,
    DEFAULT_GLOBAL_BASELINE_LITRES,
    DEFAULT_LOCAL_BASELINE_LITRES,
};
