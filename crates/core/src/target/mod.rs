//! Adapter-side facade over the target's debugger domain.

use async_trait::async_trait;
use bpcorr_api::{
    ApiError, ApiResult, AsyncDebuggingConfiguration, DebuggerApi, EnableResponse,
    PauseOnExceptions, PauseOnExceptionsStrategy, ScriptId, ScriptPosition, ScriptRef,
    ScriptSources, ScriptsRegistry,
};
use std::sync::Arc;
use tracing::debug;

/// Translates adapter-level debugger requests into target requests.
pub struct TargetDebugger<A: ?Sized, R: ?Sized> {
    api: Arc<A>,
    scripts: Arc<R>,
}

impl<A, R> TargetDebugger<A, R>
where
    A: DebuggerApi + ?Sized,
    R: ScriptsRegistry + ?Sized,
{
    pub fn new(api: Arc<A>, scripts: Arc<R>) -> Self {
        Self { api, scripts }
    }

    fn script_id(&self, script: &ScriptRef) -> ApiResult<ScriptId> {
        self.scripts.target_script_id(script).ok_or_else(|| {
            ApiError::UnknownScript(format!("{} (generation {})", script.url, script.generation))
        })
    }

    pub async fn enable(&self) -> ApiResult<EnableResponse> {
        self.api.enable().await
    }

    pub async fn set_blackboxed_ranges(
        &self,
        script: &ScriptRef,
        positions: &[ScriptPosition],
    ) -> ApiResult<()> {
        let script_id = self.script_id(script)?;
        self.api.set_blackboxed_ranges(&script_id, positions).await
    }

    pub async fn set_blackbox_patterns(&self, patterns: &[String]) -> ApiResult<()> {
        self.api.set_blackbox_patterns(patterns).await
    }
}

#[async_trait]
impl<A, R> PauseOnExceptions for TargetDebugger<A, R>
where
    A: DebuggerApi + ?Sized,
    R: ScriptsRegistry + ?Sized,
{
    async fn set_pause_on_exceptions(&self, strategy: PauseOnExceptionsStrategy) -> ApiResult<()> {
        let state = strategy.target_state();
        debug!(%strategy, %state, "setting pause on exceptions");
        self.api.set_pause_on_exceptions(state).await
    }
}

#[async_trait]
impl<A, R> AsyncDebuggingConfiguration for TargetDebugger<A, R>
where
    A: DebuggerApi + ?Sized,
    R: ScriptsRegistry + ?Sized,
{
    async fn set_async_call_stack_depth(&self, max_depth: u32) -> ApiResult<()> {
        self.api.set_async_call_stack_depth(max_depth).await
    }
}

#[async_trait]
impl<A, R> ScriptSources for TargetDebugger<A, R>
where
    A: DebuggerApi + ?Sized,
    R: ScriptsRegistry + ?Sized,
{
    async fn get_script_source(&self, script: &ScriptRef) -> ApiResult<String> {
        let script_id = self.script_id(script)?;
        self.api.get_script_source(&script_id).await
    }
}
