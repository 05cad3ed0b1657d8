pub mod app_config;
pub mod logging;
pub mod research;

pub use app_config::*;
pub use logging::*;
pub use research::*;
