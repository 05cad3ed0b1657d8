use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    logging::ObservabilityConfig,
    research::{
        ResearchConfig, DEFAULT_CATEGORY, DEFAULT_FRAMEWORK_ID, DEFAULT_MAX_WORKERS,
        DEFAULT_TIMEOUT_SECONDS, DEFAULT_VERSION,
    },
};
use crate::validation::ConfigValidator;

/// 环境变量前缀，例如 `RESEARCH_RESEARCH__MAX_WORKERS=8`
pub const ENV_PREFIX: &str = "RESEARCH";

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/research.toml", "research.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub research: ResearchConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 加载配置：默认值 -> 配置文件 -> 环境变量，后者覆盖前者
    ///
    /// 显式指定的配置文件不存在时返回错误；未指定时依次查找默认路径，
    /// 都不存在则只使用默认值和环境变量。
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let observability = ObservabilityConfig::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("research.framework_id", DEFAULT_FRAMEWORK_ID as i64)?
            .set_default("research.category", DEFAULT_CATEGORY)?
            .set_default("research.version", DEFAULT_VERSION)?
            .set_default("research.max_workers", DEFAULT_MAX_WORKERS as i64)?
            .set_default("research.timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("observability.log_level", observability.log_level)?
            .set_default("observability.log_format", observability.log_format)?;

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.research.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
