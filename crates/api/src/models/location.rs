use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A source as the client knows it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceRef {
    /// A file on disk, or a URL the client opened.
    Path { path: String },
    /// A client-side reference to a source with no path (eval'd code, generated sources).
    Reference { id: u32 },
}

impl SourceRef {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }

    pub fn reference(id: u32) -> Self {
        Self::Reference { id }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Path { path } => write!(f, "{path}"),
            SourceRef::Reference { id } => write!(f, "<source #{id}>"),
        }
    }
}

/// A zero-based position inside a client source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct SourceLocation {
    pub source: SourceRef,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SourceLocation {
    pub fn new(source: SourceRef, line: u32, column: Option<u32>) -> Self {
        Self {
            source,
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}:{}", self.source, self.line, column),
            None => write!(f, "{}:{}", self.source, self.line),
        }
    }
}

/// Identifier the target runtime assigned to a loaded script.
///
/// Every load of the same file gets a fresh id, which is what makes
/// duplicate installations of one client recipe distinguishable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(transparent)]
pub struct ScriptId(String);

impl ScriptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScriptId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScriptId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A zero-based position inside a script loaded in the target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ScriptLocation {
    pub script_id: ScriptId,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl ScriptLocation {
    pub fn new(script_id: impl Into<ScriptId>, line: u32, column: Option<u32>) -> Self {
        Self {
            script_id: script_id.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for ScriptLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "script {}:{}:{}", self.script_id, self.line, column),
            None => write!(f, "script {}:{}", self.script_id, self.line),
        }
    }
}

/// A position used when blackboxing a range of a script.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPosition {
    pub line_number: u32,
    pub column_number: u32,
}
