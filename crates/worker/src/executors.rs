use std::time::Duration;

use async_trait::async_trait;
use research_domain::{FrameworkResult, WorkItem};
use tokio::time::sleep;
use tracing::debug;

/// 模拟计算的固定耗时，与配置中的 timeout 无关
pub const SIMULATED_TASK_DURATION: Duration = Duration::from_millis(100);

/// 传给执行器的单个任务上下文
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub task_id: String,
    pub framework_id: u64,
    pub category: String,
    pub work_item: WorkItem,
}

/// 任务执行器接口
///
/// 执行器只负责"计算"本身并返回计算结果描述；计时、超时、
/// 指标累计和结果记录的组装由 [`crate::ResearchFramework`] 完成。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, context: &TaskContext) -> FrameworkResult<String>;
}

/// 默认执行器：挂起固定时长模拟计算
#[derive(Debug, Clone, Default)]
pub struct SimulatedExecutor;

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskExecutor for SimulatedExecutor {
    async fn execute(&self, context: &TaskContext) -> FrameworkResult<String> {
        debug!(
            "模拟计算: task_id={}, duration={:?}",
            context.task_id, SIMULATED_TASK_DURATION
        );
        sleep(SIMULATED_TASK_DURATION).await;
        Ok(format!("Advanced {} computation completed", context.category))
    }
}
