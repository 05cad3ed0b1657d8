pub mod app;

pub use app::{Application, DEFAULT_TASK_COUNT};
