use super::*;

fn apply(arg: &str) -> Vec<SettingOverride> {
    match parse_settings(arg).unwrap() {
        SettingsRequest::Apply(o) => o,
        SettingsRequest::Help => panic!("unexpected help for {arg}"),
    }
}

#[test]
fn bare_key_means_true() {
    let overrides = apply("zoom-hotkeys");
    assert_eq!(
        overrides,
        vec![SettingOverride {
            key: "zoom-hotkeys",
            value: SettingValue::Bool(true)
        }]
    );
}

#[test]
fn explicit_booleans_are_uppercase() {
    let overrides = apply("enable-developer-extras=FALSE,zoom-hotkeys=TRUE");
    assert_eq!(overrides[0].value, SettingValue::Bool(false));
    assert_eq!(overrides[1].value, SettingValue::Bool(true));

    let err = parse_settings("zoom-hotkeys=true").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidSettingValue { ref key, ref value, .. }
            if key == "zoom-hotkeys" && value == "true"
    ));
}

#[test]
fn string_setting_keeps_everything_after_first_equals() {
    let overrides = apply("user-agent=Mozilla/5.0 (X11) a=b");
    assert_eq!(
        overrides[0].value,
        SettingValue::Str("Mozilla/5.0 (X11) a=b".into())
    );
}

#[test]
fn string_setting_requires_value() {
    assert!(matches!(
        parse_settings("user-agent"),
        Err(ConfigError::InvalidSettingValue { .. })
    ));
}

#[test]
fn unknown_key_is_rejected() {
    let err = parse_settings("zoom-hotkeys,enable-webgl-magic").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSetting(k) if k == "enable-webgl-magic"));
}

#[test]
fn help_short_circuits() {
    assert_eq!(parse_settings("help").unwrap(), SettingsRequest::Help);
    assert_eq!(
        parse_settings("zoom-hotkeys,help,bogus").unwrap(),
        SettingsRequest::Help
    );
    // An earlier bad entry still fails first.
    assert!(parse_settings("bogus,help").is_err());
}

#[test]
fn empty_entries_are_skipped() {
    assert!(apply("").is_empty());
    assert_eq!(apply(",,zoom-hotkeys,").len(), 1);
}

#[test]
fn overrides_apply_to_webview_section() {
    let mut webview = WebViewSection::default();
    let overrides = apply(
        "media-playback-requires-user-gesture,javascript-can-access-clipboard,\
         enable-private-browsing,user-agent=hud/1,enable-developer-extras=FALSE",
    );
    apply_overrides(&mut webview, &overrides);

    assert!(!webview.autoplay);
    assert!(webview.clipboard);
    assert!(webview.incognito);
    assert!(!webview.devtools);
    assert_eq!(webview.user_agent.as_deref(), Some("hud/1"));
}

#[test]
fn later_override_wins() {
    let mut webview = WebViewSection::default();
    apply_overrides(&mut webview, &apply("zoom-hotkeys,zoom-hotkeys=FALSE"));
    assert!(!webview.zoom_hotkeys);
}

#[test]
fn help_text_lists_current_values() {
    let mut webview = WebViewSection::default();
    webview.user_agent = Some("hud/2".into());
    let text = help_text(&webview);
    for spec in SETTINGS {
        assert!(text.contains(spec.name), "missing {}", spec.name);
    }
    assert!(text.contains("enable-developer-extras (TRUE)"));
    assert!(text.contains("media-playback-requires-user-gesture (FALSE)"));
    assert!(text.contains("user-agent=<string> ('hud/2')"));
}
