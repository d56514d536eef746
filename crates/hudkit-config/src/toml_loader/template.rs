/// Default config file content. Every value is commented out, so the file
/// documents the defaults without pinning them.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# hudkit configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "hudkit"
# always_on_top = true
# override_redirect = true   # X11: bypass the window manager

[webview]
# transparent = true
# devtools = true            # allow the developer inspector
# user_agent = "..."
# autoplay = true
# clipboard = false
# incognito = false
# zoom_hotkeys = false

[inspector]
# open_on_start = false      # same as --inspect
# attached = false

[process]
# forward_stderr = true
# read_chunk_bytes = 8192    # 512-1048576

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
