use crate::validation::{ConfigValidator, ValidationUtils};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FRAMEWORK_ID: u64 = 1;
pub const DEFAULT_CATEGORY: &str = "distributed-computing";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_MAX_WORKERS: usize = 4;
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 30.0;

/// 研究框架配置
///
/// 框架实例创建后即持有该配置的独立副本，运行期间不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// 框架编号，出现在初始化信息、报告和合成任务ID中
    pub framework_id: u64,
    /// 研究类别标签
    pub category: String,
    pub version: String,
    /// 批处理时同时执行的最大任务数
    pub max_workers: usize,
    /// 单个任务的执行超时（秒）
    pub timeout_seconds: f64,
}

impl ResearchConfig {
    pub fn new<S: Into<String>>(framework_id: u64, category: S) -> Self {
        Self {
            framework_id,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: f64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            framework_id: DEFAULT_FRAMEWORK_ID,
            category: DEFAULT_CATEGORY.to_string(),
            version: DEFAULT_VERSION.to_string(),
            max_workers: DEFAULT_MAX_WORKERS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigValidator for ResearchConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.category, "research.category")?;
        ValidationUtils::validate_version(&self.version, "research.version")?;
        ValidationUtils::validate_count(self.max_workers, "research.max_workers", 1024)?;
        ValidationUtils::validate_timeout_seconds(self.timeout_seconds, "research.timeout_seconds")?;
        Ok(())
    }
}
