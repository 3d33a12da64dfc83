use std::fs;

use nec_motor_toolbox::config::{self, Config};
use nec_motor_toolbox::motor::ProtectionType;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let again = config::load_or_default(&path).expect("reload");
    assert_eq!(again, cfg);
}

#[test]
fn partial_config_fills_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nprotection = \"std_fuse\"\n").expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.defaults.protection, ProtectionType::StdFuse);
    assert_eq!(cfg.defaults.nema_code, "G");
    assert!(cfg.defaults.estimate_lra);
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn invalid_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nprotection = \"fuse\"\n").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("motor.toml");
    let mut cfg = Config::default();
    cfg.defaults.protection = ProtectionType::DualFuse;
    cfg.defaults.nema_code = "J".to_string();
    cfg.defaults.estimate_lra = false;
    cfg.logging.level = "debug".to_string();
    cfg.save(&path).expect("save");

    let loaded = config::load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}
