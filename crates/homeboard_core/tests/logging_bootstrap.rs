use homeboard_core::{default_log_level, init_logging, logging_status};
use tempfile::tempdir;

// Logging state is process-global, so the whole bootstrap contract is
// exercised in one test body.
#[test]
fn init_is_idempotent_and_rejects_conflicting_config() {
    let dir = tempdir().expect("temp dir");
    let dir_str = dir.path().to_str().expect("utf-8 temp path").to_string();
    let other = tempdir().expect("second temp dir");
    let other_str = other.path().to_str().expect("utf-8 temp path").to_string();

    assert!(logging_status().is_none());

    init_logging("info", &dir_str).expect("first init should succeed");
    init_logging("info", &dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &dir_str).expect_err("level conflict");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &other_str).expect_err("directory conflict");
    assert!(dir_error.contains("refusing to switch"));

    let unsupported = init_logging("verbose", &dir_str).expect_err("unknown level");
    assert!(unsupported.contains("unsupported log level"));

    let (level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());

    assert!(matches!(default_log_level(), "debug" | "info"));
}
