pub mod error;
pub mod events;
pub mod models;
pub mod target;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use events::{BreakpointEvent, BreakpointsEventsListener};
pub use models::*;
pub use target::{
    AsyncDebuggingConfiguration, DebuggerApi, EnableResponse, PauseOnExceptions, ScriptRef,
    ScriptSources, ScriptsRegistry,
};
