use std::{fs, path::PathBuf};

use gesture_config_compiler::{
    generate_from_path, parse_config_file, render_generated_config, validate_config,
    ConfigCompilerError,
};
use spellcast::Axis;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("missing tools dir")
        .parent()
        .expect("missing repo root")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn snapshot(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

fn validation_error(name: &str) -> ConfigCompilerError {
    let file = parse_config_file(&fixture(name)).expect("fixture should parse");
    validate_config(&file).expect_err("fixture should be rejected")
}

#[test]
fn default_config_matches_snapshot() {
    let config = repo_root().join("config/gesture.toml");
    let actual = generate_from_path(&config).expect("default config should compile");
    let expected = fs::read_to_string(snapshot("default_generated.rs"))
        .expect("missing default snapshot file");

    assert_eq!(
        actual, expected,
        "generated output changed; if intentional, update tools/gesture_config_compiler/tests/snapshots/default_generated.rs"
    );
}

#[test]
fn generation_is_deterministic_for_same_input() {
    let config = fixture("valid_default.toml");
    let first = generate_from_path(&config).expect("first generation failed");
    let second = generate_from_path(&config).expect("second generation failed");
    assert_eq!(first, second);
}

#[test]
fn missing_radio_section_defaults_to_channel_one() {
    let file = parse_config_file(&fixture("valid_accel_axes.toml")).expect("fixture should parse");
    let config = validate_config(&file).expect("fixture should validate");

    assert_eq!(config.lateral, Axis::AccelY);
    assert_eq!(config.vertical, Axis::AccelZ);
    assert_eq!(config.sample_interval_ms, 20);
    assert_eq!(config.cooldown_ms, 250);
    assert_eq!(config.espnow_channel, 1);

    let rendered = render_generated_config(&config);
    for needle in [
        "spellcast::Axis::AccelY;",
        "spellcast::Axis::AccelZ;",
        "SAMPLE_INTERVAL_MS: u32 = 20;",
        "COOLDOWN_MS: u32 = 250;",
        "ESPNOW_CHANNEL: u8 = 1;",
    ] {
        assert!(rendered.contains(needle), "missing `{needle}` in:\n{rendered}");
    }
}

#[test]
fn rejects_same_axis_for_both_buffers() {
    let err = validation_error("invalid_duplicate_axis.toml");
    assert!(matches!(err, ConfigCompilerError::SameAxis(Axis::GyroX)));
    assert!(err.to_string().contains("gyro_x"));
}

#[test]
fn rejects_unknown_axis_name() {
    let err = validation_error("invalid_unknown_axis.toml");
    assert!(matches!(
        &err,
        ConfigCompilerError::UnknownAxis { field: "lateral", value } if value == "gyro_w"
    ));
    assert!(err.to_string().contains("accel_x"));
}

#[test]
fn rejects_zero_sample_interval() {
    let err = validation_error("invalid_zero_interval.toml");
    assert!(matches!(err, ConfigCompilerError::ZeroSampleInterval));
}

#[test]
fn rejects_channel_out_of_range() {
    let err = validation_error("invalid_channel.toml");
    assert!(matches!(err, ConfigCompilerError::ChannelOutOfRange(15)));
}

#[test]
fn rejects_unknown_fields_at_parse_time() {
    let err = parse_config_file(&fixture("invalid_unknown_field.toml"))
        .expect_err("unknown field should fail");
    assert!(matches!(err, ConfigCompilerError::Parse { .. }));
    assert!(err.to_string().contains("roll"));
}

#[test]
fn missing_file_reports_path() {
    let err = parse_config_file(&fixture("does_not_exist.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigCompilerError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.toml"));
}
