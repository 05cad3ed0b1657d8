use std::io;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use research_config::{AppConfig, LogFormat};
use research_framework::{Application, DEFAULT_TASK_COUNT};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let matches = Command::new("research-framework")
        .version("1.0.0")
        .about("分布式计算研究框架")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("配置文件路径（TOML）"),
        )
        .arg(
            Arg::new("tasks")
                .short('t')
                .long("tasks")
                .value_name("N")
                .help("示例任务数量（默认5）")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别，覆盖配置文件")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式，覆盖配置文件")
                .value_parser(["compact", "pretty", "json"]),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config");
    let task_count = matches
        .get_one::<usize>("tasks")
        .copied()
        .unwrap_or(DEFAULT_TASK_COUNT);

    // 加载配置
    let mut config = AppConfig::load(config_path.map(String::as_str)).with_context(|| {
        format!(
            "加载配置失败: {}",
            config_path.map(String::as_str).unwrap_or("<默认配置>")
        )
    })?;

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.observability.log_level = level.clone();
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.observability.log_format = format.clone();
    }

    // 初始化日志系统
    let log_format = config.observability.format()?;
    init_logging(&config.observability.log_level, log_format)?;

    info!("启动研究框架");
    if let Some(path) = config_path {
        info!("配置文件: {path}");
    }
    info!(
        "框架ID: {}, 类别: {}, 最大并发: {}",
        config.research.framework_id, config.research.category, config.research.max_workers
    );

    let app = Application::new(config, task_count);
    let mut stdout = io::stdout();
    app.run(&mut stdout).await?;

    Ok(())
}

/// 初始化日志系统，只在进程启动时调用一次
fn init_logging(log_level: &str, log_format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("初始化JSON日志格式失败")?,
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .context("初始化Pretty日志格式失败")?,
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
            .context("初始化Compact日志格式失败")?,
    }

    Ok(())
}
