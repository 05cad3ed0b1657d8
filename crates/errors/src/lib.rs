use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("数据验证失败: {0}")]
    Validation(String),
    #[error("任务执行错误: {0}")]
    TaskExecution(String),
    #[error("任务执行超时: {task_id} 超过 {timeout_seconds}秒")]
    ExecutionTimeout { task_id: String, timeout_seconds: f64 },
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type FrameworkResult<T> = Result<T, FrameworkError>;

impl FrameworkError {
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
    pub fn task_execution<S: Into<String>>(msg: S) -> Self {
        Self::TaskExecution(msg.into())
    }
    pub fn execution_timeout<S: Into<String>>(task_id: S, timeout_seconds: f64) -> Self {
        Self::ExecutionTimeout {
            task_id: task_id.into(),
            timeout_seconds,
        }
    }
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FrameworkError::Internal(_) | FrameworkError::Configuration(_)
        )
    }
    pub fn is_retryable(&self) -> bool {
        matches!(self, FrameworkError::ExecutionTimeout { .. })
    }
    pub fn user_message(&self) -> &str {
        match self {
            FrameworkError::Configuration(_) => "框架配置有误",
            FrameworkError::Validation(_) => "输入数据验证失败",
            FrameworkError::ExecutionTimeout { .. } => "任务执行超时，请稍后重试",
            FrameworkError::TaskExecution(_) => "任务执行失败",
            _ => "系统繁忙，请稍后重试",
        }
    }
}

impl From<serde_json::Error> for FrameworkError {
    fn from(err: serde_json::Error) -> Self {
        FrameworkError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for FrameworkError {
    fn from(err: anyhow::Error) -> Self {
        FrameworkError::Internal(err.to_string())
    }
}
