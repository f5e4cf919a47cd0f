#![allow(dead_code)]

use bpcorr_api::{
    BpBehavior, ClientBpRecipe, DebuggeeBpRecipe, ScriptLocation, SourceLocation, SourceRef,
};

pub fn client(path: &str, line: u32) -> ClientBpRecipe {
    ClientBpRecipe::always_break(SourceLocation::new(SourceRef::path(path), line, None))
}

pub fn conditional_client(path: &str, line: u32, expression: &str) -> ClientBpRecipe {
    ClientBpRecipe::new(
        SourceLocation::new(SourceRef::path(path), line, None),
        BpBehavior::Conditional {
            expression: expression.to_string(),
        },
    )
}

/// A debuggee recipe for `client` installed in the script with id `script_id`.
pub fn debuggee(client: &ClientBpRecipe, script_id: &str) -> DebuggeeBpRecipe {
    DebuggeeBpRecipe::new(
        client.clone(),
        ScriptLocation::new(script_id, client.location.line, Some(0)),
    )
}
