use super::location::{ScriptLocation, SourceLocation};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the client asked to happen when execution reaches the breakpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BpBehavior {
    #[default]
    AlwaysBreak,
    Conditional {
        expression: String,
    },
    HitCount {
        pattern: String,
    },
    LogPoint {
        message: String,
    },
}

impl fmt::Display for BpBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BpBehavior::AlwaysBreak => write!(f, "always break"),
            BpBehavior::Conditional { expression } => write!(f, "break if {expression}"),
            BpBehavior::HitCount { pattern } => write!(f, "break when hit count {pattern}"),
            BpBehavior::LogPoint { message } => write!(f, "log \"{message}\""),
        }
    }
}

/// A breakpoint request expressed in client/source terms.
///
/// The correlation layer treats this as an opaque key: it only relies on
/// equality, hashing and `Display`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ClientBpRecipe {
    pub location: SourceLocation,
    #[serde(default)]
    pub behavior: BpBehavior,
}

impl ClientBpRecipe {
    pub fn new(location: SourceLocation, behavior: BpBehavior) -> Self {
        Self { location, behavior }
    }

    pub fn always_break(location: SourceLocation) -> Self {
        Self::new(location, BpBehavior::AlwaysBreak)
    }
}

impl fmt::Display for ClientBpRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BP @ {} do: {}", self.location, self.behavior)
    }
}

/// Handle the target runtime returned when the breakpoint was installed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(transparent)]
pub struct TargetBreakpointId(pub String);

impl fmt::Display for TargetBreakpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A breakpoint installed inside the running target on behalf of a client recipe.
///
/// Several debuggee recipes may point back at the same client recipe (one per
/// script load), and two of them may even be equal by value; each one is
/// still a separate installation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct DebuggeeBpRecipe {
    unmapped_recipe: ClientBpRecipe,
    pub location: ScriptLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoint_id: Option<TargetBreakpointId>,
}

impl DebuggeeBpRecipe {
    pub fn new(unmapped_recipe: ClientBpRecipe, location: ScriptLocation) -> Self {
        Self {
            unmapped_recipe,
            location,
            breakpoint_id: None,
        }
    }

    pub fn with_breakpoint_id(mut self, id: impl Into<String>) -> Self {
        self.breakpoint_id = Some(TargetBreakpointId(id.into()));
        self
    }

    /// The client recipe this installation was made for.
    pub fn unmapped_recipe(&self) -> &ClientBpRecipe {
        &self.unmapped_recipe
    }
}

impl fmt::Display for DebuggeeBpRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.breakpoint_id {
            Some(id) => write!(
                f,
                "Debuggee BP {id} @ {} (for {})",
                self.location, self.unmapped_recipe
            ),
            None => write!(
                f,
                "Debuggee BP @ {} (for {})",
                self.location, self.unmapped_recipe
            ),
        }
    }
}
