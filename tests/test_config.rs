use galaxian::config::*;
use galaxian::entities::Mode;

use std::path::Path;

#[test]
fn defaults_match_the_arcade_feel() {
    let t = Tuning::default();
    assert_eq!(t.alien_speed(Mode::Normal), 0.02);
    assert_eq!(t.alien_speed(Mode::Hard), 0.05);
    assert_eq!(t.burst_interval_ms(Mode::Normal), 500);
    assert_eq!(t.burst_interval_ms(Mode::Hard), 200);
    assert_eq!(t.color_change_interval_ms, 3000);
    assert_eq!(t.descent_interval_ms, 5000);
    assert_eq!(t.descent_gap_ms, 1000);
    assert_eq!(t.burst_size, 3);
    assert!(t.validate().is_ok());
}

#[test]
fn default_config() {
    let c = GameConfig::default();
    assert_eq!(c.frame_millis, 16);
    assert_eq!(c.start_mode(), Mode::Normal);
    assert_eq!(c.log_filter, "info");
    assert_eq!(c.tuning, Tuning::default());
}

#[test]
fn empty_ron_gives_defaults() {
    let c = GameConfig::from_ron("()").unwrap();
    assert_eq!(c.frame_millis, 16);
    assert_eq!(c.tuning, Tuning::default());
}

#[test]
fn partial_ron_overrides_only_named_fields() {
    let c = GameConfig::from_ron(
        "(frame_millis: 33, start_hard: true, tuning: (alien_speed_hard: 0.07))",
    )
    .unwrap();
    assert_eq!(c.frame_millis, 33);
    assert_eq!(c.start_mode(), Mode::Hard);
    assert_eq!(c.tuning.alien_speed_hard, 0.07);
    assert_eq!(c.tuning.alien_speed_normal, 0.02);
}

#[test]
fn zero_speed_rejected() {
    let err = GameConfig::from_ron("(tuning: (shot_speed: 0.0))").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "shot_speed",
            ..
        }
    ));
}

#[test]
fn zero_interval_rejected() {
    let mut t = Tuning::default();
    t.descent_interval_ms = 0;
    assert!(matches!(
        t.validate(),
        Err(ConfigError::OutOfRange {
            field: "descent_interval_ms",
            ..
        })
    ));
}

#[test]
fn inverted_patrol_limits_rejected() {
    let mut t = Tuning::default();
    t.alien_left_limit = 3.0;
    t.alien_right_limit = -3.0;
    assert!(t.validate().is_err());
}

#[test]
fn zero_frame_length_rejected() {
    assert!(GameConfig::from_ron("(frame_millis: 0)").is_err());
}

#[test]
fn garbage_is_a_parse_error() {
    let err = GameConfig::from_ron("this is not ron").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = GameConfig::load_from(Path::new("/definitely/not/here/galaxian.ron")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("could not read"));
}

#[test]
fn load_from_reads_a_file() {
    let path = std::env::temp_dir().join(format!("galaxian-test-{}.ron", std::process::id()));
    std::fs::write(&path, "(frame_millis: 20)").unwrap();
    let c = GameConfig::load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(c.frame_millis, 20);
}
