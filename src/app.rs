use std::io::Write;

use anyhow::{Context, Result};
use research_config::AppConfig;
use research_domain::{PerformanceReport, WorkItem};
use research_worker::ResearchFramework;
use tracing::info;

pub const DEFAULT_TASK_COUNT: usize = 5;

/// 主应用程序：初始化框架、运行一批示例任务并输出报告
pub struct Application {
    config: AppConfig,
    task_count: usize,
}

impl Application {
    pub fn new(config: AppConfig, task_count: usize) -> Self {
        Self { config, task_count }
    }

    /// 生成示例工作项 `research_<framework_id>_<i>`
    pub fn sample_tasks(framework_id: u64, count: usize) -> Vec<WorkItem> {
        (0..count)
            .map(|i| {
                WorkItem::new()
                    .with_task_id(format!("research_{framework_id}_{i}"))
                    .with_field("data", format!("sample_data_{i}"))
                    .with_field("complexity", "high")
            })
            .collect()
    }

    /// 运行完整流程，将初始化信息、性能报告和完成提示写入 `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<PerformanceReport> {
        let research = &self.config.research;
        let framework =
            ResearchFramework::new(research.clone()).context("创建研究框架失败")?;

        let init_result = framework.initialize_research().await;
        writeln!(
            out,
            "Framework initialized: {}",
            serde_json::to_string(&init_result)?
        )?;

        let sample_tasks = Self::sample_tasks(research.framework_id, self.task_count);
        let results = framework
            .run_batch_processing(&sample_tasks)
            .await
            .context("批处理执行失败")?;
        info!("示例任务执行完成: {} 个结果", results.len());

        let report = framework.get_performance_report().await;
        writeln!(
            out,
            "Performance Report: {}",
            serde_json::to_string(&report)?
        )?;

        writeln!(
            out,
            "Research framework {} execution completed successfully",
            research.framework_id
        )?;

        Ok(report)
    }
}
