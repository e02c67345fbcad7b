use gtools_core::{AppConfig, Enum, GtoolsError, Mode, ModeOperator, Runtime};
use tempfile::TempDir;

#[test]
fn test_runtime_from_config_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let config_path = tmp.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[general]
log_level = "warn"
log_targets = false

[mode]
build_mode = "production"
"#,
    )
    .expect("write config file");

    let config = AppConfig::load_from(&config_path).expect("load config");
    let runtime = Runtime::with_build_flag(config, None).expect("build runtime");

    assert_eq!(runtime.mode(), Mode::Production);
    assert!(!runtime.config().general.log_targets);
}

#[test]
fn test_env_override_beats_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let config_path = tmp.path().join("config.toml");

    let mut on_disk = AppConfig::default();
    on_disk.mode.build_mode = Some("production".to_string());
    on_disk.save_to(&config_path).expect("save config");

    let mut config = AppConfig::load_from(&config_path).expect("load config");
    config.apply_overrides(|key| (key == "GTOOLS_MODE").then(String::new));

    let runtime = Runtime::with_build_flag(config, None).expect("build runtime");
    assert!(runtime.is_development_mode());
}

#[test]
fn test_staging_mode_does_not_start() {
    let tmp = TempDir::new().expect("create temp dir");
    let config_path = tmp.path().join("config.toml");
    std::fs::write(&config_path, "[mode]\nbuild_mode = \"staging\"\n").expect("write config");

    let config = AppConfig::load_from(&config_path).expect("load config");
    match Runtime::new(config) {
        Err(GtoolsError::Mode(err)) => assert!(err.to_string().contains("staging")),
        other => panic!("Expected mode error, got {other:?}"),
    }
}

#[test]
fn test_feature_flags_gated_by_mode() {
    let mut config = AppConfig::default();
    config.mode.build_mode = Some("development".to_string());
    let runtime = Runtime::with_build_flag(config, None).expect("build runtime");

    let exporters: Enum<&str, str> = Enum::from_values(["stdout", "otlp"]);
    let chosen = runtime
        .execute_if_mode_is_production(|| exporters.parse("otlp"))
        .unwrap_or_else(|| exporters.parse("stdout"));

    assert_eq!(chosen.expect("known exporter"), "stdout");
}

#[test]
fn test_production_build_keeps_production_despite_config() {
    let tmp = TempDir::new().expect("create temp dir");
    let config_path = tmp.path().join("config.toml");
    std::fs::write(&config_path, "[mode]\nbuild_mode = \"\"\n").expect("write config");

    let config = AppConfig::load_from(&config_path).expect("load config");
    let runtime = Runtime::with_build_flag(config, Some(Mode::Production)).expect("build runtime");

    assert!(runtime.is_production_mode());
    assert_eq!(runtime.execute_if_mode_is_production(|| "report"), Some("report"));
}
