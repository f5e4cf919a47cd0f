//! Event-driven lifecycle of the client/debuggee recipe correlation.

mod common;

use bpcorr_api::{BreakpointEvent, BreakpointsEventsListener};
use bpcorr_core::{CorrelationError, DebuggeeRecipesFinder};
use common::{client, conditional_client, debuggee};

#[test]
fn test_duplicate_installations_are_kept() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();

    let found = finder.find_debuggee_recipes(&c);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|recipe| recipe == &d));
}

#[test]
fn test_removing_one_duplicate_leaves_the_other() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();
    finder.debuggee_recipe_removed(&d).unwrap();

    assert_eq!(finder.find_debuggee_recipes(&c), vec![d]);
}

#[test]
fn test_removal_is_precise() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d1 = debuggee(&c, "1");
    let d2 = debuggee(&c, "2");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d1.clone()).unwrap();
    finder.debuggee_recipe_added(d2.clone()).unwrap();
    finder.debuggee_recipe_removed(&d1).unwrap();

    assert_eq!(finder.find_debuggee_recipes(&c), vec![d2]);
}

#[test]
fn test_unknown_client_recipe_has_no_debuggee_recipes() {
    let finder = DebuggeeRecipesFinder::new();
    assert!(finder.find_debuggee_recipes(&client("never.js", 1)).is_empty());
}

#[test]
fn test_added_client_recipe_without_installations_is_empty() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 3);
    finder.client_recipe_added(c.clone()).unwrap();

    assert!(finder.is_tracking(&c));
    assert!(finder.find_debuggee_recipes(&c).is_empty());
}

#[test]
fn test_client_recipe_with_live_installations_cannot_be_removed() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();

    let err = finder.client_recipe_removed(&c).unwrap_err();
    assert_eq!(
        err,
        CorrelationError::DanglingDebuggeeRecipes {
            client_recipe: c.clone(),
            debuggee_recipes: vec![d.clone()],
        }
    );

    // Rejected, not partially applied.
    assert!(finder.is_tracking(&c));
    assert_eq!(finder.find_debuggee_recipes(&c), vec![d]);
}

#[test]
fn test_clean_teardown() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();
    finder.debuggee_recipe_removed(&d).unwrap();
    finder.client_recipe_removed(&c).unwrap();

    assert!(!finder.is_tracking(&c));
    assert!(finder.find_debuggee_recipes(&c).is_empty());
}

#[test]
fn test_removing_unrecorded_debuggee_recipe_fails() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    let err = finder.debuggee_recipe_removed(&d).unwrap_err();
    assert_eq!(
        err,
        CorrelationError::MissingAssociation {
            client_recipe: c.clone(),
            debuggee_recipe: d.clone(),
        }
    );

    // Known client recipe, but a different installation.
    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(debuggee(&c, "7")).unwrap();
    assert!(matches!(
        finder.debuggee_recipe_removed(&d),
        Err(CorrelationError::MissingAssociation { .. })
    ));
}

#[test]
fn test_double_removal_fails() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.client_recipe_added(c.clone()).unwrap();
    finder.debuggee_recipe_added(d.clone()).unwrap();
    finder.debuggee_recipe_removed(&d).unwrap();

    assert!(matches!(
        finder.debuggee_recipe_removed(&d),
        Err(CorrelationError::MissingAssociation { .. })
    ));
}

#[test]
fn test_removing_unknown_client_recipe_fails() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);

    assert_eq!(
        finder.client_recipe_removed(&c),
        Err(CorrelationError::UnknownKey { client_recipe: c })
    );
}

#[test]
fn test_debuggee_recipe_added_before_client_recipe_creates_entry() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    let d = debuggee(&c, "42");

    finder.debuggee_recipe_added(d.clone()).unwrap();
    assert!(finder.is_tracking(&c));

    // A late "added" event for the client recipe keeps the installation.
    finder.client_recipe_added(c.clone()).unwrap();
    assert_eq!(finder.find_debuggee_recipes(&c), vec![d]);
}

#[test]
fn test_recipes_differing_only_in_behavior_are_separate_keys() {
    let mut finder = DebuggeeRecipesFinder::new();
    let plain = client("app.js", 10);
    let conditional = conditional_client("app.js", 10, "x > 3");

    finder.client_recipe_added(plain.clone()).unwrap();
    finder.client_recipe_added(conditional.clone()).unwrap();
    finder.debuggee_recipe_added(debuggee(&conditional, "5")).unwrap();

    assert!(finder.find_debuggee_recipes(&plain).is_empty());
    assert_eq!(finder.find_debuggee_recipes(&conditional).len(), 1);
    finder.client_recipe_removed(&plain).unwrap();
}

#[test]
fn test_event_stream_scenario() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c1 = client("main.js", 4);
    let d1 = debuggee(&c1, "1");
    let d2 = debuggee(&c1, "2");

    let events = vec![
        BreakpointEvent::ClientRecipeAdded(c1.clone()),
        BreakpointEvent::DebuggeeRecipeAdded(d1.clone()),
        BreakpointEvent::DebuggeeRecipeAdded(d2.clone()),
        BreakpointEvent::DebuggeeRecipeRemoved(d1),
    ];
    for event in events {
        finder.apply(event).unwrap();
    }
    assert_eq!(finder.find_debuggee_recipes(&c1), vec![d2.clone()]);

    let err = finder
        .apply(BreakpointEvent::ClientRecipeRemoved(c1.clone()))
        .unwrap_err();
    assert!(matches!(
        err,
        CorrelationError::DanglingDebuggeeRecipes { ref debuggee_recipes, .. }
            if debuggee_recipes == &vec![d2.clone()]
    ));
    assert_eq!(finder.find_debuggee_recipes(&c1), vec![d2]);
}

#[test]
fn test_dangling_error_message_names_the_recipes() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    finder.debuggee_recipe_added(debuggee(&c, "42")).unwrap();

    let message = finder.client_recipe_removed(&c).unwrap_err().to_string();
    assert!(message.contains("app.js:10"));
    assert!(message.contains("script 42:10:0"));
    assert!(message.contains("still had 1 associated"));
}

#[test]
fn test_dump_lists_associations() {
    let mut finder = DebuggeeRecipesFinder::new();
    let c = client("app.js", 10);
    finder.client_recipe_added(c.clone()).unwrap();

    assert_eq!(
        finder.to_string(),
        "Debuggee BPRs set for Client BPR finder: {BP @ app.js:10 do: always break: {}}"
    );

    finder.debuggee_recipe_added(debuggee(&c, "42")).unwrap();
    finder.debuggee_recipe_added(debuggee(&c, "42")).unwrap();
    assert!(finder.to_string().contains("x2"));
}
