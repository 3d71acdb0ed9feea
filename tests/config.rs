//! Plugin configuration through to the first rendered frame.

use std::collections::BTreeMap;
use std::io::Write;
use talentscope::ui::Body;
use talentscope::{initialize, Config};

#[test]
fn configuration_reaches_app_settings() {
    let map: BTreeMap<String, String> = [
        ("page_size", "4"),
        ("action_delay_ms", "500"),
        ("narrow_results", "true"),
        ("candidates_file", "~/candidates.json"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let state = initialize(&Config::from_zellij(&map));
    assert_eq!(state.settings.page_size, 4);
    assert!((state.settings.action_delay - 0.5).abs() < f64::EPSILON);
    assert!(state.settings.narrow_results);
    assert_eq!(state.settings.candidates_file.as_deref(), Some("~/candidates.json"));
}

#[test]
fn theme_file_wins_over_name() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let mocha = include_str!("../themes/catppuccin-mocha.toml");
    file.write_all(mocha.replace("catppuccin-mocha", "my-theme").as_bytes())
        .expect("write theme");

    let config = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        theme_file: Some(file.path().display().to_string()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).theme.name, "my-theme");
}

#[test]
fn first_frame_is_home() {
    let state = initialize(&Config::default());
    let vm = state.compute_viewmodel(30, 100);
    assert!(matches!(vm.body, Body::Home(_)));
    assert!(vm.chat.is_none());
    assert!(vm.overlay.is_none());
}
