mod report;

pub use report::{build_report, panic_message, write_crash_report};
