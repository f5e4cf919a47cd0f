//! Serializes breakpoint events and correlation queries for multi-threaded hosts.
//!
//! Producers push events through an [`EventIntake`]; a single consumer applies
//! them to the [`DebuggeeRecipesFinder`] one at a time. Queries take a read
//! lock, so they never observe a half-applied event.

use std::sync::Arc;

use bpcorr_api::{BreakpointEvent, ClientBpRecipe, DebuggeeBpRecipe};
use tokio::sync::{Mutex, RwLock, mpsc};
use tracing::{error, info};

use crate::config::{CorrelationConfig, ViolationPolicy};
use crate::error::{BpcError, Result};
use crate::registry::DebuggeeRecipesFinder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub rejected: usize,
}

#[derive(Clone)]
pub struct EventIntake {
    tx: mpsc::Sender<BreakpointEvent>,
}

impl EventIntake {
    pub async fn submit(&self, event: BreakpointEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| BpcError::Internal("correlation service intake closed".to_string()))
    }
}

pub struct CorrelationService {
    finder: RwLock<DebuggeeRecipesFinder>,
    policy: ViolationPolicy,
    intake_rx: Mutex<Option<mpsc::Receiver<BreakpointEvent>>>,
}

impl CorrelationService {
    /// The service stops once every clone of the returned intake is dropped.
    pub fn new(config: &CorrelationConfig) -> (Arc<Self>, EventIntake) {
        let (tx, rx) = mpsc::channel(config.intake_capacity.max(1));
        let service = Self {
            finder: RwLock::new(DebuggeeRecipesFinder::new()),
            policy: config.violation_policy,
            intake_rx: Mutex::new(Some(rx)),
        };
        (Arc::new(service), EventIntake { tx })
    }

    pub async fn run(&self) -> Result<ReplayStats> {
        let mut rx = self
            .intake_rx
            .lock()
            .await
            .take()
            .ok_or_else(|| BpcError::Internal("correlation service already started".to_string()))?;

        info!(policy = ?self.policy, "correlation service started");
        let mut stats = ReplayStats::default();

        while let Some(event) = rx.recv().await {
            let kind = event.kind();
            let outcome = self.finder.write().await.apply(event);

            match outcome {
                Ok(()) => stats.applied += 1,
                Err(err) => match self.policy {
                    ViolationPolicy::Halt => {
                        error!(event = kind, "halting on breakpoint bookkeeping violation: {}", err);
                        return Err(err.into());
                    }
                    ViolationPolicy::LogAndContinue => {
                        error!(event = kind, "dropping event: {}", err);
                        stats.rejected += 1;
                    }
                },
            }
        }

        info!(
            applied = stats.applied,
            rejected = stats.rejected,
            "correlation service stopped"
        );
        Ok(stats)
    }

    pub async fn find_debuggee_recipes(
        &self,
        client_recipe: &ClientBpRecipe,
    ) -> Vec<DebuggeeBpRecipe> {
        self.finder.read().await.find_debuggee_recipes(client_recipe)
    }

    pub async fn dump(&self) -> String {
        self.finder.read().await.to_string()
    }
}
