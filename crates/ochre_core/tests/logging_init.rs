use ochre_core::{init_logging, logging_status, LoggingConfig, LoggingError};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp dir should be created");
    let second_dir = tempfile::tempdir().expect("temp dir should be created");

    let config = LoggingConfig::new("info", log_dir.path());
    init_logging(&config).expect("first init should succeed");
    init_logging(&config).expect("same config should be idempotent");

    let level_error = init_logging(&LoggingConfig::new("debug", log_dir.path()))
        .expect_err("level conflict should fail");
    assert!(matches!(level_error, LoggingError::Conflict { setting: "level", .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging(&LoggingConfig::new("info", second_dir.path()))
        .expect_err("directory conflict should fail");
    assert!(matches!(dir_error, LoggingError::Conflict { setting: "log_dir", .. }));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}

#[test]
fn relative_log_dir_is_rejected_before_init() {
    let err = init_logging(&LoggingConfig::new("info", "logs/dev")).expect_err("relative dir");
    assert!(matches!(err, LoggingError::InvalidLogDir { .. }));
}
