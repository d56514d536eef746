use clap::Parser;

/// hudkit: a click-through web overlay for your desktop.
#[derive(Parser, Debug)]
#[command(name = "hudkit", version, about)]
pub struct Args {
    /// Page to load, e.g. file:///home/mary/hud.html or http://localhost:4000
    pub url: Option<String>,

    /// Open the web inspector on start.
    #[arg(long)]
    pub inspect: bool,

    /// Comma-separated engine settings, e.g.
    /// `enable-developer-extras,user-agent=hud/1.0`. Pass `help` to list them.
    #[arg(long, value_name = "SETTINGS")]
    pub webkit_settings: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `hudkit=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Result<Args, clap::Error> {
    Args::try_parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_and_flags() {
        let args = Args::try_parse_from([
            "hudkit",
            "http://localhost:4000",
            "--inspect",
            "--webkit-settings",
            "zoom-hotkeys=TRUE",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("http://localhost:4000"));
        assert!(args.inspect);
        assert_eq!(args.webkit_settings.as_deref(), Some("zoom-hotkeys=TRUE"));
    }

    #[test]
    fn url_is_optional_at_parse_time() {
        let args = Args::try_parse_from(["hudkit"]).unwrap();
        assert!(args.url.is_none());
        assert!(!args.inspect);
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(Args::try_parse_from(["hudkit", "a", "b"]).is_err());
    }

    #[test]
    fn help_is_reported_as_help() {
        let err = Args::try_parse_from(["hudkit", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
