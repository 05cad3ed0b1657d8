use serde::{Deserialize, Serialize};

use crate::entities::per_second;

/// 框架级累计指标
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkMetrics {
    pub tasks_completed: u64,
    pub tasks_failed: u64,
    /// 成功任务的累计耗时（秒）
    pub total_runtime: f64,
    /// tasks_completed / (tasks_completed + tasks_failed)，尚无任务时为0
    pub success_rate: f64,
}

impl FrameworkMetrics {
    pub fn record_success(&mut self, execution_time: f64) {
        self.tasks_completed += 1;
        self.total_runtime += execution_time;
        self.refresh_success_rate();
    }

    pub fn record_failure(&mut self) {
        self.tasks_failed += 1;
        self.refresh_success_rate();
    }

    pub fn tasks_attempted(&self) -> u64 {
        self.tasks_completed + self.tasks_failed
    }

    pub fn average_task_time(&self) -> f64 {
        if self.tasks_completed > 0 {
            self.total_runtime / self.tasks_completed as f64
        } else {
            0.0
        }
    }

    pub fn tasks_per_second(&self) -> f64 {
        per_second(self.average_task_time())
    }

    fn refresh_success_rate(&mut self) {
        let attempted = self.tasks_attempted();
        self.success_rate = if attempted > 0 {
            self.tasks_completed as f64 / attempted as f64
        } else {
            0.0
        };
    }
}
