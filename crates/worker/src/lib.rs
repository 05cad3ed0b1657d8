pub mod executors;
pub mod framework;


pub use executors::{SimulatedExecutor, TaskContext, TaskExecutor, SIMULATED_TASK_DURATION};
pub use framework::ResearchFramework;
