use crate::collections::ValidatedMultiMap;
use crate::error::CorrelationError;
use bpcorr_api::{BreakpointEvent, BreakpointsEventsListener, ClientBpRecipe, DebuggeeBpRecipe};
use std::fmt;
use tracing::{debug, warn};

/// Finds every debuggee breakpoint recipe installed for a client breakpoint recipe.
///
/// Driven only by breakpoint events. A client recipe can be forgotten only
/// after all of its debuggee recipes were removed.
#[derive(Debug, Default)]
pub struct DebuggeeRecipesFinder {
    client_to_debuggee: ValidatedMultiMap<ClientBpRecipe, DebuggeeBpRecipe>,
}

impl DebuggeeRecipesFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Debuggee recipes currently installed for `client_recipe`, duplicates included.
    ///
    /// Unknown client recipes have no debuggee recipes.
    pub fn find_debuggee_recipes(&self, client_recipe: &ClientBpRecipe) -> Vec<DebuggeeBpRecipe> {
        self.client_to_debuggee.get_or_empty(client_recipe).to_vec()
    }

    pub fn is_tracking(&self, client_recipe: &ClientBpRecipe) -> bool {
        self.client_to_debuggee.contains_key(client_recipe)
    }

    pub fn apply(&mut self, event: BreakpointEvent) -> Result<(), CorrelationError> {
        event.dispatch_to(self)
    }
}

impl BreakpointsEventsListener for DebuggeeRecipesFinder {
    type Error = CorrelationError;

    fn client_recipe_added(&mut self, recipe: ClientBpRecipe) -> Result<(), CorrelationError> {
        debug!(client_recipe = %recipe, "client recipe added");
        self.client_to_debuggee.ensure_key(recipe);
        Ok(())
    }

    fn client_recipe_removed(&mut self, recipe: &ClientBpRecipe) -> Result<(), CorrelationError> {
        let debuggee_recipes = self.client_to_debuggee.get_strict(recipe)?;
        if !debuggee_recipes.is_empty() {
            warn!(
                client_recipe = %recipe,
                remaining = debuggee_recipes.len(),
                "client recipe removed while debuggee recipes are still installed"
            );
            return Err(CorrelationError::DanglingDebuggeeRecipes {
                client_recipe: recipe.clone(),
                debuggee_recipes: debuggee_recipes.to_vec(),
            });
        }

        self.client_to_debuggee.delete_key(recipe)?;
        debug!(client_recipe = %recipe, "client recipe removed");
        Ok(())
    }

    fn debuggee_recipe_added(&mut self, recipe: DebuggeeBpRecipe) -> Result<(), CorrelationError> {
        debug!(debuggee_recipe = %recipe, "debuggee recipe added");
        // Loading the same script twice installs the same client recipe twice.
        self.client_to_debuggee.add_allow_duplicates(recipe.unmapped_recipe().clone(), recipe);
        Ok(())
    }

    fn debuggee_recipe_removed(
        &mut self,
        recipe: &DebuggeeBpRecipe,
    ) -> Result<(), CorrelationError> {
        self.client_to_debuggee.remove_one(recipe.unmapped_recipe(), recipe)?;
        debug!(debuggee_recipe = %recipe, "debuggee recipe removed");
        Ok(())
    }
}

impl fmt::Display for DebuggeeRecipesFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Debuggee BPRs set for Client BPR finder: {}", self.client_to_debuggee)
    }
}
