//! Breakpoint lifecycle events.
//!
//! The breakpoints layer announces every recipe it creates or retires, in the
//! order the operations happened. Consumers either implement
//! [`BreakpointsEventsListener`] directly or receive [`BreakpointEvent`] values
//! and forward them with [`BreakpointEvent::dispatch_to`].
//!
//! Producers guarantee:
//! - a client recipe's "added" event precedes any debuggee recipe installed for it;
//! - every debuggee recipe's "removed" event precedes the "removed" event of its client recipe;
//! - events are delivered one at a time, never re-entrantly.

use crate::models::{ClientBpRecipe, DebuggeeBpRecipe};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One subscription point per event kind.
pub trait BreakpointsEventsListener {
    type Error;

    fn client_recipe_added(&mut self, recipe: ClientBpRecipe) -> Result<(), Self::Error>;

    fn client_recipe_removed(&mut self, recipe: &ClientBpRecipe) -> Result<(), Self::Error>;

    fn debuggee_recipe_added(&mut self, recipe: DebuggeeBpRecipe) -> Result<(), Self::Error>;

    fn debuggee_recipe_removed(&mut self, recipe: &DebuggeeBpRecipe) -> Result<(), Self::Error>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "event", content = "recipe", rename_all = "snake_case")]
pub enum BreakpointEvent {
    ClientRecipeAdded(ClientBpRecipe),
    ClientRecipeRemoved(ClientBpRecipe),
    DebuggeeRecipeAdded(DebuggeeBpRecipe),
    DebuggeeRecipeRemoved(DebuggeeBpRecipe),
}

impl BreakpointEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BreakpointEvent::ClientRecipeAdded(_) => "client_recipe_added",
            BreakpointEvent::ClientRecipeRemoved(_) => "client_recipe_removed",
            BreakpointEvent::DebuggeeRecipeAdded(_) => "debuggee_recipe_added",
            BreakpointEvent::DebuggeeRecipeRemoved(_) => "debuggee_recipe_removed",
        }
    }

    /// The client recipe the event is about, directly or through the back-reference.
    pub fn client_recipe(&self) -> &ClientBpRecipe {
        match self {
            BreakpointEvent::ClientRecipeAdded(recipe)
            | BreakpointEvent::ClientRecipeRemoved(recipe) => recipe,
            BreakpointEvent::DebuggeeRecipeAdded(recipe)
            | BreakpointEvent::DebuggeeRecipeRemoved(recipe) => recipe.unmapped_recipe(),
        }
    }

    pub fn dispatch_to<L>(self, listener: &mut L) -> Result<(), L::Error>
    where
        L: BreakpointsEventsListener + ?Sized,
    {
        match self {
            BreakpointEvent::ClientRecipeAdded(recipe) => listener.client_recipe_added(recipe),
            BreakpointEvent::ClientRecipeRemoved(recipe) => listener.client_recipe_removed(&recipe),
            BreakpointEvent::DebuggeeRecipeAdded(recipe) => listener.debuggee_recipe_added(recipe),
            BreakpointEvent::DebuggeeRecipeRemoved(recipe) => {
                listener.debuggee_recipe_removed(&recipe)
            }
        }
    }
}

impl fmt::Display for BreakpointEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakpointEvent::ClientRecipeAdded(recipe)
            | BreakpointEvent::ClientRecipeRemoved(recipe) => {
                write!(f, "{}: {}", self.kind(), recipe)
            }
            BreakpointEvent::DebuggeeRecipeAdded(recipe)
            | BreakpointEvent::DebuggeeRecipeRemoved(recipe) => {
                write!(f, "{}: {}", self.kind(), recipe)
            }
        }
    }
}
