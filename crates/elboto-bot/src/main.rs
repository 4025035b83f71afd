//! Main entry point for Elboto.

use elboto_bot::{log_config_summary, BotResult, ElbotoBot};
use elboto_commands::valorant::REGISTRATION_STORE;
use elboto_config::ConfigLoader;
use elboto_storage::{PersistentStore, RuntimeDir};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be up yet if the config itself failed.
            eprintln!("elboto: {e}");
            error!("Bot stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BotResult<()> {
    let loader = ConfigLoader::from_env();
    let config = loader.load()?;
    let _log_guard = elboto_common::init_logging(&config.logging)?;

    log_config_summary(&config, loader.path());
    info!("Starting Elboto");

    let runtime_dir = RuntimeDir::default();
    runtime_dir.ensure()?;
    let registrations = PersistentStore::open(&runtime_dir, REGISTRATION_STORE)?;

    ElbotoBot::new(config, registrations).start().await
}
