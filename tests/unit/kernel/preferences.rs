use super::*;

#[test]
fn default_preferences_match_startup_values() {
    let prefs = Preferences::default();
    assert_eq!(prefs.font_size.get(), 18);
    assert_eq!(prefs.theme, Theme::Dracula);
    assert!(prefs.interpreter(InterpreterSlot::Primary).is_empty());
}

#[test]
fn theme_names_round_trip_through_serde() {
    for theme in Theme::ALL {
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, format!("\"{}\"", theme.name()));
        assert_eq!(Theme::from_name(theme.name()), Some(theme));
    }
    assert_eq!(Theme::from_name("ONEDARK"), Some(Theme::OneDark));
    assert_eq!(Theme::from_name("solarized"), None);
}

#[test]
fn apply_remote_ignores_absent_paths() {
    let mut prefs = Preferences {
        interpreter_path_primary: "/usr/bin/python3".to_string(),
        ..Preferences::default()
    };

    let changed = prefs.apply_remote(RemoteConfig {
        path_first: None,
        path_second: Some("/opt/py311/bin/python".to_string()),
    });

    assert!(changed);
    assert_eq!(prefs.interpreter_path_primary, "/usr/bin/python3");
    assert_eq!(prefs.interpreter_path_secondary, "/opt/py311/bin/python");
    assert!(!prefs.apply_remote(RemoteConfig::default()));
}

#[test]
fn remote_config_carries_only_interpreter_paths() {
    let prefs = Preferences {
        interpreter_path_primary: "p1".to_string(),
        interpreter_path_secondary: "p2".to_string(),
        font_size: NonZeroU16::new(20).unwrap(),
        theme: Theme::Eclipse,
    };
    let json = serde_json::to_value(prefs.remote_config()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "path_first": "p1", "path_second": "p2" })
    );
}
