pub mod crash_report;
pub mod display;
pub mod paths;
pub mod shape;

pub use display::{is_composited, monitor_info};
pub use paths::{config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, log_dir};
pub use shape::create_input_shape;
