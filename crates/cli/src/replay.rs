use bpcorr_api::{BreakpointEvent, ClientBpRecipe};
use bpcorr_core::{CorrelationConfig, CorrelationService};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub async fn run(
    path: PathBuf,
    config: CorrelationConfig,
    query: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse the query up front so a typo doesn't cost a full replay.
    let query: Option<ClientBpRecipe> = query.as_deref().map(serde_json::from_str).transpose()?;
    let events = read_event_log(&path)?;
    info!("Replaying {} events from {}", events.len(), path.display());

    let mut stdout = std::io::stdout().lock();
    replay_events(events, &config, query.as_ref(), &mut stdout).await
}

/// Feeds `events` through a fresh correlation service and reports to `out`.
///
/// The registry dump is written even when the replay halts on a violation.
async fn replay_events<W: Write>(
    events: Vec<BreakpointEvent>,
    config: &CorrelationConfig,
    query: Option<&ClientBpRecipe>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let (service, intake) = CorrelationService::new(config);
    let runner = tokio::spawn({
        let service = service.clone();
        async move { service.run().await }
    });

    for event in events {
        if intake.submit(event).await.is_err() {
            warn!("Correlation service stopped before the log was fully replayed");
            break;
        }
    }
    drop(intake);

    let outcome = runner.await?;
    writeln!(out, "{}", service.dump().await)?;

    let stats = outcome?;
    writeln!(out, "Applied: {}", stats.applied)?;
    writeln!(out, "Rejected: {}", stats.rejected)?;

    if let Some(client_recipe) = query {
        let recipes = service.find_debuggee_recipes(client_recipe).await;
        writeln!(out, "{}", serde_json::to_string_pretty(&recipes)?)?;
    }

    Ok(())
}

fn read_event_log(path: &Path) -> Result<Vec<BreakpointEvent>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    parse_event_log(&content).map_err(|e| format!("{}:{}", path.display(), e).into())
}

fn parse_event_log(content: &str) -> Result<Vec<BreakpointEvent>, String> {
    let mut events = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| format!("{}: {}", index + 1, e))?;
        events.push(event);
    }
    Ok(events)
}
