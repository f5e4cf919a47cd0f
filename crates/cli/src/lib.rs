mod replay;
mod schema;

use bpcorr_core::{CorrelationConfig, ViolationPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bpcorr",
    version,
    about = "Replays breakpoint lifecycle events through the recipe correlation registry",
    long_about = "bpcorr tracks which breakpoints installed in a debug target belong to which \
                  client breakpoint request. It replays recorded breakpoint events, reports \
                  bookkeeping violations and dumps the resulting correlation state."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a recorded breakpoint event log
    #[command(
        long_about = "Reads a JSON-lines event log (one breakpoint event per line, blank lines and \
                            lines starting with '#' are ignored) and applies it in order."
    )]
    Replay {
        /// Path to the event log
        #[arg(value_name = "EVENT_LOG")]
        path: PathBuf,

        /// Path to a JSON configuration file
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Log violations and keep replaying instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,

        /// Client breakpoint recipe (JSON) whose debuggee recipes should be printed
        #[arg(short, long, value_name = "CLIENT_RECIPE_JSON")]
        query: Option<String>,
    },
    /// Print the JSON schema of event log lines
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            path,
            config,
            keep_going,
            query,
        } => {
            let mut config = CorrelationConfig::load_or_default(config.as_deref())?;
            if keep_going {
                config.violation_policy = ViolationPolicy::LogAndContinue;
            }
            let _guard = bpcorr_core::logging::init_logging("replay", &config.log);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(replay::run(path, config, query))
        }
        Commands::Schema => schema::run(),
    }
}
