use chrono::{DateTime, Utc};
use research_errors::{FrameworkError, FrameworkResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::FrameworkMetrics;

/// 工作项中唯一会被读取的字段
pub const TASK_ID_FIELD: &str = "task_id";
pub const MEMORY_EFFICIENCY_OPTIMAL: &str = "optimal";
pub const SIMULATED_ACCURACY: f64 = 0.99;

/// 调用方提交的一个计算单元描述
///
/// 字段内容不做校验，只读取可选的 `task_id` 字符串字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItem {
    fields: Map<String, Value>,
}

impl WorkItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从任意JSON值构造，只接受对象
    pub fn from_value(value: Value) -> FrameworkResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(FrameworkError::validation_error(format!(
                "工作项必须是JSON对象，实际为: {other}"
            ))),
        }
    }

    pub fn with_task_id<S: Into<String>>(self, task_id: S) -> Self {
        self.with_field(TASK_ID_FIELD, Value::String(task_id.into()))
    }

    pub fn with_field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// 调用方提供的任务ID；非字符串值视为未提供
    pub fn task_id(&self) -> Option<&str> {
        self.fields.get(TASK_ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for WorkItem {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// 单个任务的性能指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPerformance {
    /// 每秒任务数，按本次耗时推算
    pub throughput: f64,
    pub memory_efficiency: String,
    pub accuracy: f64,
    /// 回显配置的 max_workers
    pub scalability_factor: usize,
}

impl TaskPerformance {
    pub fn from_execution(execution_time: f64, max_workers: usize) -> Self {
        Self {
            throughput: per_second(execution_time),
            memory_efficiency: MEMORY_EFFICIENCY_OPTIMAL.to_string(),
            accuracy: SIMULATED_ACCURACY,
            scalability_factor: max_workers,
        }
    }
}

/// 单个任务的执行结果记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: String,
    pub computation_result: String,
    /// 实测耗时（秒）
    pub execution_time: f64,
    pub performance_metrics: TaskPerformance,
    /// 本任务更新计数器之后的框架指标快照
    pub framework_metrics: FrameworkMetrics,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// `1 / seconds`，耗时为0时返回0
pub fn per_second(seconds: f64) -> f64 {
    if seconds > 0.0 {
        1.0 / seconds
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_work_item_task_id() {
        let item = WorkItem::new()
            .with_task_id("research_1_0")
            .with_field("data", "sample_data_0")
            .with_field("complexity", "high");

        assert_eq!(item.task_id(), Some("research_1_0"));
        assert_eq!(item.get("data"), Some(&json!("sample_data_0")));
        assert_eq!(item.fields().len(), 3);
    }

    #[test]
    fn test_work_item_without_task_id() {
        let item = WorkItem::from_value(json!({"data": 1})).unwrap();
        assert_eq!(item.task_id(), None);

        // 非字符串的task_id不会被读取
        let item = WorkItem::from_value(json!({"task_id": 17})).unwrap();
        assert_eq!(item.task_id(), None);
    }

    #[test]
    fn test_work_item_from_non_object() {
        let result = WorkItem::from_value(json!([1, 2, 3]));
        assert!(matches!(result, Err(FrameworkError::Validation(_))));
    }

    #[test]
    fn test_work_item_serializes_as_plain_object() {
        let item = WorkItem::new().with_task_id("t1").with_field("n", 3);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"task_id": "t1", "n": 3}));

        let parsed: WorkItem = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_task_performance_from_execution() {
        let perf = TaskPerformance::from_execution(0.1, 4);
        assert!((perf.throughput - 10.0).abs() < 1e-9);
        assert_eq!(perf.memory_efficiency, "optimal");
        assert_eq!(perf.accuracy, 0.99);
        assert_eq!(perf.scalability_factor, 4);

        let perf = TaskPerformance::from_execution(0.0, 2);
        assert_eq!(perf.throughput, 0.0);
    }

    #[test]
    fn test_per_second() {
        assert_eq!(per_second(0.0), 0.0);
        assert_eq!(per_second(-1.0), 0.0);
        assert!((per_second(0.25) - 4.0).abs() < 1e-9);
    }
}
