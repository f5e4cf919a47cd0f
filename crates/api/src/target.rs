use crate::error::ApiResult;
use crate::models::{PauseOnExceptionsState, PauseOnExceptionsStrategy, ScriptId, ScriptPosition};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A script as the adapter knows it, before it is translated to the target's id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptRef {
    pub url: String,
    /// Distinguishes repeated loads of the same url.
    pub generation: u32,
}

impl ScriptRef {
    pub fn new(url: impl Into<String>, generation: u32) -> Self {
        Self {
            url: url.into(),
            generation,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnableResponse {
    pub debugger_id: String,
}

/// Raw requests of the target's debugger domain.
///
/// Implemented by the host transport; every call is one request/response pair.
#[async_trait]
pub trait DebuggerApi: Send + Sync {
    async fn enable(&self) -> ApiResult<EnableResponse>;

    async fn set_async_call_stack_depth(&self, max_depth: u32) -> ApiResult<()>;

    async fn set_blackboxed_ranges(
        &self,
        script_id: &ScriptId,
        positions: &[ScriptPosition],
    ) -> ApiResult<()>;

    async fn set_blackbox_patterns(&self, patterns: &[String]) -> ApiResult<()>;

    async fn set_pause_on_exceptions(&self, state: PauseOnExceptionsState) -> ApiResult<()>;

    async fn get_script_source(&self, script_id: &ScriptId) -> ApiResult<String>;
}

/// Translates adapter scripts to the ids the target assigned them.
pub trait ScriptsRegistry: Send + Sync {
    fn target_script_id(&self, script: &ScriptRef) -> Option<ScriptId>;
}

#[async_trait]
pub trait PauseOnExceptions: Send + Sync {
    async fn set_pause_on_exceptions(&self, strategy: PauseOnExceptionsStrategy) -> ApiResult<()>;
}

#[async_trait]
pub trait AsyncDebuggingConfiguration: Send + Sync {
    async fn set_async_call_stack_depth(&self, max_depth: u32) -> ApiResult<()>;
}

#[async_trait]
pub trait ScriptSources: Send + Sync {
    async fn get_script_source(&self, script: &ScriptRef) -> ApiResult<String>;
}
