use crate::collections::MultiMapError;
use bpcorr_api::{ApiError, ClientBpRecipe, DebuggeeBpRecipe};
use thiserror::Error;

/// Violations of the client/debuggee recipe bookkeeping.
///
/// Every variant points at a sequencing defect upstream of the registry; none
/// of them is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    #[error(
        "Tried to remove debuggee breakpoint recipe ({debuggee_recipe}) which was never associated with client breakpoint recipe ({client_recipe})"
    )]
    MissingAssociation {
        client_recipe: ClientBpRecipe,
        debuggee_recipe: DebuggeeBpRecipe,
    },
    #[error(
        "Tried to remove a client breakpoint recipe ({client_recipe}) which still had {} associated debuggee breakpoint recipes ({})",
        .debuggee_recipes.len(),
        render_list(.debuggee_recipes)
    )]
    DanglingDebuggeeRecipes {
        client_recipe: ClientBpRecipe,
        debuggee_recipes: Vec<DebuggeeBpRecipe>,
    },
    #[error("Unknown client breakpoint recipe: {client_recipe}")]
    UnknownKey { client_recipe: ClientBpRecipe },
}

impl From<MultiMapError<ClientBpRecipe, DebuggeeBpRecipe>> for CorrelationError {
    fn from(err: MultiMapError<ClientBpRecipe, DebuggeeBpRecipe>) -> Self {
        match err {
            MultiMapError::UnknownKey { key } => CorrelationError::UnknownKey { client_recipe: key },
            MultiMapError::MissingAssociation { key, value } => {
                CorrelationError::MissingAssociation {
                    client_recipe: key,
                    debuggee_recipe: value,
                }
            }
        }
    }
}

fn render_list(recipes: &[DebuggeeBpRecipe]) -> String {
    recipes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum BpcError {
    #[error(transparent)]
    Correlation(#[from] CorrelationError),
    #[error("Target error: {0}")]
    Target(#[from] ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, BpcError>;
