pub mod config;
pub mod error;
pub mod logging;

pub mod collections;
pub mod registry;
pub mod runtime;
pub mod target;

pub use config::{CorrelationConfig, LogConfig, ViolationPolicy};
pub use error::{BpcError, CorrelationError, Result};
pub use registry::DebuggeeRecipesFinder;
pub use runtime::{CorrelationService, EventIntake, ReplayStats};
pub use target::TargetDebugger;
