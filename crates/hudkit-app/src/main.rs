mod app_state;
mod cli;
mod exit;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use hudkit_config::settings::{self, SettingsRequest};
use hudkit_config::HudkitConfig;

use app_state::{OverlayApp, UserEvent};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = hudkit_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- hudkit crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn init_logging(args: &cli::Args, config: &HudkitConfig) {
    let fallback = config.logging.level.directive();
    let log_directive = args.log_level.clone().unwrap_or_else(|| fallback.clone());
    let directive: Result<Directive, _> = log_directive.parse().or_else(|_| fallback.parse());
    let filter = match directive {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config file plus `--webkit-settings` overrides. `Err` carries the exit
/// status.
fn load_config(args: &cli::Args) -> Result<HudkitConfig, u8> {
    let path = args.config.as_ref().map(PathBuf::from);
    let mut config = hudkit_config::load_config(path.as_deref()).map_err(|e| {
        eprintln!("hudkit: {e}");
        exit::for_config_error(&e)
    })?;

    if let Some(arg) = &args.webkit_settings {
        match settings::parse_settings(arg) {
            Ok(SettingsRequest::Help) => {
                print!("{}", settings::help_text(&config.webview));
                return Err(exit::SUCCESS);
            }
            Ok(SettingsRequest::Apply(overrides)) => {
                if let Err(e) = hudkit_config::apply_settings(&mut config, &overrides) {
                    eprintln!("hudkit: {e}");
                    return Err(exit::BAD_SETTING);
                }
            }
            Err(e) => {
                eprintln!("hudkit: {e}");
                eprintln!("Run with --webkit-settings help to list valid settings.");
                return Err(exit::for_config_error(&e));
            }
        }
    }

    Ok(config)
}

#[cfg(target_os = "linux")]
fn init_toolkit() -> Result<(), u8> {
    // Input shapes and override-redirect are X11 features.
    std::env::set_var("GDK_BACKEND", "x11");
    if let Err(e) = gtk::init() {
        tracing::error!("Failed to initialize GTK: {e}");
        return Err(exit::INTERNAL);
    }
    if !hudkit_platform::is_composited() {
        tracing::error!(
            "Your screen does not support transparency. \
             A compositing manager (e.g. compton, picom) must be running."
        );
        return Err(exit::NOT_COMPOSITED);
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn init_toolkit() -> Result<(), u8> {
    Ok(())
}

fn build_event_loop() -> Result<EventLoop<UserEvent>, winit::error::EventLoopError> {
    #[allow(unused_mut)]
    let mut builder = EventLoop::<UserEvent>::with_user_event();
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_x11();
    }
    builder.build()
}

fn run() -> u8 {
    install_panic_hook();

    let args = match cli::parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit::SUCCESS,
                _ => exit::USAGE,
            };
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let Some(url) = args.url.clone() else {
        eprintln!("hudkit: no URL given. Run with --help for usage.");
        return exit::NO_URL;
    };

    init_logging(&args, &config);
    tracing::info!("hudkit v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::debug!(config = %hudkit_config::config_to_json(&config), "config loaded");

    if let Err(e) = hudkit_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    if let Err(code) = init_toolkit() {
        return code;
    }

    let event_loop = match build_event_loop() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return exit::INTERNAL;
        }
    };

    let open_inspector = args.inspect || config.inspector.open_on_start;
    let mut app = match OverlayApp::new(config, url, open_inspector, event_loop.create_proxy()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            return exit::INTERNAL;
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return exit::INTERNAL;
    }
    tracing::info!("Shutdown complete");
    app.exit_code()
}

fn main() -> ExitCode {
    ExitCode::from(run())
}
