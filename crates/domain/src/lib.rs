pub mod entities;
pub mod metrics;
pub mod reports;

pub use entities::*;
pub use metrics::*;
pub use reports::*;
pub use research_errors::{FrameworkError, FrameworkResult};
