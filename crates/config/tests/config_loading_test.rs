use std::fs;

use research_config::AppConfig;
use tempfile::TempDir;

// 环境变量是进程级共享状态，文件和环境变量的加载放在同一个测试里顺序执行
#[test]
fn test_load_from_file_and_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("research.toml");
    fs::write(
        &config_path,
        r#"
[research]
framework_id = 5
category = "edge-inference"
max_workers = 3
timeout_seconds = 2.5

[observability]
log_level = "warn"
"#,
    )
    .expect("Failed to write config file");
    let path = config_path.to_str().expect("non-utf8 temp path");

    std::env::remove_var("RESEARCH_RESEARCH__MAX_WORKERS");
    let config = AppConfig::load(Some(path)).expect("Failed to load config");
    assert_eq!(config.research.framework_id, 5);
    assert_eq!(config.research.category, "edge-inference");
    assert_eq!(config.research.max_workers, 3);
    assert_eq!(config.research.timeout_seconds, 2.5);
    // 文件中未出现的字段取默认值
    assert_eq!(config.research.version, "1.0.0");
    assert_eq!(config.observability.log_level, "warn");
    assert_eq!(config.observability.log_format, "compact");

    std::env::set_var("RESEARCH_RESEARCH__MAX_WORKERS", "8");
    let config = AppConfig::load(Some(path)).expect("Failed to load config");
    assert_eq!(config.research.max_workers, 8);
    assert_eq!(config.research.framework_id, 5);

    std::env::set_var("RESEARCH_RESEARCH__MAX_WORKERS", "0");
    assert!(AppConfig::load(Some(path)).is_err());

    std::env::remove_var("RESEARCH_RESEARCH__MAX_WORKERS");
}
