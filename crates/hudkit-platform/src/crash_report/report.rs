use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;

use crate::paths::crash_report_dir;

/// Writes a crash report for a panic and returns its path.
///
/// Runs inside the panic hook, so every failure is swallowed and reported
/// as `None`. On Unix the file is readable by the owner only.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("crash_{timestamp}.json"));

    let message = panic_message(info.payload());
    let location = info
        .location()
        .map(|loc| (loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(&message, location, &backtrace);

    std::fs::create_dir_all(&dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

/// JSON body of a crash report.
pub fn build_report(
    message: &str,
    location: Option<(&str, u32, u32)>,
    backtrace: &str,
) -> serde_json::Value {
    let location = location.map(|(file, line, column)| {
        serde_json::json!({
            "file": file,
            "line": line,
            "column": column,
        })
    });

    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": message,
        "location": location,
        "backtrace": backtrace,
    })
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
