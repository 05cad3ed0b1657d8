//! 研究框架
//!
//! [`ResearchFramework`] 持有配置、执行器和指标累计器，对外提供：
//! - 初始化并返回静态能力描述
//! - 执行单个研究任务（计时、超时、指标更新、结果记录）
//! - 在并发上限内批量执行任务，结果按输入顺序返回
//! - 根据累计指标生成性能报告

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use metrics::{counter, histogram};
use research_config::{ConfigValidator, ResearchConfig};
use research_domain::{
    FrameworkError, FrameworkMetrics, FrameworkResult, InitializationInfo, PerformanceReport,
    TaskPerformance, TaskResult, WorkItem,
};
use tokio::sync::{RwLock, Semaphore};
use tokio::time::{timeout, Instant};
use tracing::{debug, error, info, warn};

use crate::executors::{SimulatedExecutor, TaskContext, TaskExecutor};

pub struct ResearchFramework {
    config: ResearchConfig,
    executor: Arc<dyn TaskExecutor>,
    metrics: RwLock<FrameworkMetrics>,
    is_running: AtomicBool,
    /// 合成任务ID的序号，保证同一秒内生成的ID也不重复
    task_sequence: AtomicU64,
}

impl ResearchFramework {
    /// 使用默认的模拟执行器创建框架
    pub fn new(config: ResearchConfig) -> FrameworkResult<Self> {
        Self::with_executor(config, Arc::new(SimulatedExecutor::new()))
    }

    pub fn with_executor(
        config: ResearchConfig,
        executor: Arc<dyn TaskExecutor>,
    ) -> FrameworkResult<Self> {
        config
            .validate()
            .map_err(|e| FrameworkError::config_error(e.to_string()))?;

        debug!(
            "创建研究框架: framework_id={}, category={}, max_workers={}, timeout={}s",
            config.framework_id, config.category, config.max_workers, config.timeout_seconds
        );

        Ok(Self {
            config,
            executor,
            metrics: RwLock::new(FrameworkMetrics::default()),
            is_running: AtomicBool::new(false),
            task_sequence: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &ResearchConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::SeqCst)
    }

    pub async fn initialize_research(&self) -> InitializationInfo {
        info!(
            "Initializing {} research framework {}",
            self.config.category, self.config.framework_id
        );
        self.is_running.store(true, Ordering::SeqCst);

        InitializationInfo::new(
            &self.config.category,
            &self.config.version,
            self.config.framework_id,
        )
    }

    /// 执行单个研究任务
    ///
    /// 成功时计入 `tasks_completed` 和 `total_runtime`；执行器出错或超时
    /// 计入 `tasks_failed`，错误原样返回。
    pub async fn execute_research_task(&self, work_item: &WorkItem) -> FrameworkResult<TaskResult> {
        let started_at = Utc::now();
        let start_time = Instant::now();
        let task_id = match work_item.task_id() {
            Some(id) => id.to_string(),
            None => self.next_task_id(),
        };

        info!(
            "Executing {} research task {}",
            self.config.category, task_id
        );

        let context = self.task_context(task_id.clone(), work_item);
        let limit = Duration::from_secs_f64(self.config.timeout_seconds);

        let outcome = match timeout(limit, self.executor.execute(&context)).await {
            Ok(result) => result,
            Err(_) => Err(FrameworkError::execution_timeout(
                task_id.clone(),
                self.config.timeout_seconds,
            )),
        };

        let computation_result = match outcome {
            Ok(output) => output,
            Err(e) => {
                self.metrics.write().await.record_failure();
                let reason = match &e {
                    FrameworkError::ExecutionTimeout { .. } => {
                        warn!("任务 {} 执行超时: {}", task_id, e);
                        "timeout"
                    }
                    _ => {
                        error!("任务 {} 执行失败: {}", task_id, e);
                        "error"
                    }
                };
                counter!("research_tasks_failed_total", "reason" => reason).increment(1);
                return Err(e);
            }
        };

        let execution_time = start_time.elapsed().as_secs_f64();
        let framework_metrics = {
            let mut metrics = self.metrics.write().await;
            metrics.record_success(execution_time);
            metrics.clone()
        };
        counter!("research_tasks_completed_total").increment(1);
        histogram!("research_task_duration_seconds").record(execution_time);

        Ok(TaskResult {
            task_id,
            computation_result,
            execution_time,
            performance_metrics: TaskPerformance::from_execution(
                execution_time,
                self.config.max_workers,
            ),
            framework_metrics,
            started_at,
            completed_at: Utc::now(),
        })
    }

    /// 批量执行任务
    ///
    /// 同时执行的任务数不超过 `max_workers`，结果按输入顺序返回。
    /// 所有任务都结束后，只要有一个失败，整批返回输入顺序中第一个错误。
    pub async fn run_batch_processing(
        &self,
        work_items: &[WorkItem],
    ) -> FrameworkResult<Vec<TaskResult>> {
        info!("Starting batch processing of {} tasks", work_items.len());

        let semaphore = Semaphore::new(self.config.max_workers);
        let semaphore = &semaphore;

        let pending = work_items.iter().map(move |work_item| async move {
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| FrameworkError::Internal(format!("获取并发许可失败: {e}")))?;
            self.execute_research_task(work_item).await
        });

        let results = join_all(pending)
            .await
            .into_iter()
            .collect::<FrameworkResult<Vec<_>>>()?;

        info!("Batch processing completed: {} results", results.len());
        Ok(results)
    }

    pub async fn get_performance_report(&self) -> PerformanceReport {
        let metrics = self.metrics().await;
        PerformanceReport::from_metrics(self.config.framework_id, &self.config.category, metrics)
    }

    /// 当前指标的快照
    pub async fn metrics(&self) -> FrameworkMetrics {
        self.metrics.read().await.clone()
    }

    fn task_context(&self, task_id: String, work_item: &WorkItem) -> TaskContext {
        TaskContext {
            task_id,
            framework_id: self.config.framework_id,
            category: self.config.category.clone(),
            work_item: work_item.clone(),
        }
    }

    fn next_task_id(&self) -> String {
        let sequence = self.task_sequence.fetch_add(1, Ordering::Relaxed);
        format!(
            "task_{}_{}_{}",
            self.config.framework_id,
            Utc::now().timestamp(),
            sequence
        )
    }
}
