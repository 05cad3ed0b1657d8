use serde::{Deserialize, Serialize};

use crate::metrics::FrameworkMetrics;

pub const STATUS_INITIALIZED: &str = "initialized";
pub const EFFICIENCY_RATING_HIGH: &str = "high";

pub const CAPABILITIES: [&str; 4] = [
    "distributed_processing",
    "real_time_analysis",
    "performance_optimization",
    "scalable_architecture",
];

/// 框架初始化后返回的静态能力描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializationInfo {
    pub framework: String,
    pub version: String,
    pub research_id: u64,
    pub status: String,
    pub capabilities: Vec<String>,
}

impl InitializationInfo {
    pub fn new(category: &str, version: &str, framework_id: u64) -> Self {
        Self {
            framework: category.to_string(),
            version: version.to_string(),
            research_id: framework_id,
            status: STATUS_INITIALIZED.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub average_task_time: f64,
    pub tasks_per_second: f64,
    pub efficiency_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub framework_id: u64,
    pub category: String,
    pub metrics: FrameworkMetrics,
    pub performance: PerformanceSummary,
}

impl PerformanceReport {
    pub fn from_metrics(framework_id: u64, category: &str, metrics: FrameworkMetrics) -> Self {
        let performance = PerformanceSummary {
            average_task_time: metrics.average_task_time(),
            tasks_per_second: metrics.tasks_per_second(),
            efficiency_rating: EFFICIENCY_RATING_HIGH.to_string(),
        };
        Self {
            framework_id,
            category: category.to_string(),
            metrics,
            performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_info() {
        let info = InitializationInfo::new("distributed-computing", "1.0.0", 1);
        assert_eq!(info.framework, "distributed-computing");
        assert_eq!(info.research_id, 1);
        assert_eq!(info.status, "initialized");
        assert_eq!(
            info.capabilities,
            vec![
                "distributed_processing",
                "real_time_analysis",
                "performance_optimization",
                "scalable_architecture"
            ]
        );
    }

    #[test]
    fn test_report_from_empty_metrics() {
        let report = PerformanceReport::from_metrics(1, "x", FrameworkMetrics::default());
        assert_eq!(report.performance.average_task_time, 0.0);
        assert_eq!(report.performance.tasks_per_second, 0.0);
        assert_eq!(report.performance.efficiency_rating, "high");
    }

    #[test]
    fn test_report_serialization_shape() {
        let mut metrics = FrameworkMetrics::default();
        metrics.record_success(0.5);
        let report = PerformanceReport::from_metrics(3, "graph", metrics);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["framework_id"], 3);
        assert_eq!(value["metrics"]["tasks_completed"], 1);
        assert_eq!(value["performance"]["tasks_per_second"], 2.0);
    }
}
