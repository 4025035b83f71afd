//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use elboto_commands::{create_framework, Data};
use elboto_config::Config;
use elboto_storage::PersistentStore;
use serenity::all::{Client, GatewayIntents};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Gateway intents: everything non-privileged plus message content for
/// prefix commands, minus typing events.
#[must_use]
pub fn gateway_intents() -> GatewayIntents {
    (GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT)
        - GatewayIntents::GUILD_MESSAGE_TYPING
        - GatewayIntents::DIRECT_MESSAGE_TYPING
}

/// Logs what was loaded from `path`. Call once the subscriber is installed.
pub fn log_config_summary(config: &Config, path: &Path) {
    info!(
        path = %path.display(),
        prefix = %config.command_prefix,
        regions = ?config.configured_regions().collect::<Vec<_>>(),
        access_roles = config.valorant_access_roles.len(),
        "Configuration loaded"
    );
}

/// Main bot structure.
pub struct ElbotoBot {
    config: Arc<Config>,
    registrations: Arc<PersistentStore>,
}

impl ElbotoBot {
    /// Creates a new bot instance.
    pub fn new(config: Config, registrations: PersistentStore) -> Self {
        Self {
            config: Arc::new(config),
            registrations: Arc::new(registrations),
        }
    }

    /// The configuration the bot runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connects to Discord and runs until the client stops.
    pub async fn start(&self) -> BotResult<()> {
        let config = Arc::clone(&self.config);
        let registrations = Arc::clone(&self.registrations);

        let framework = create_framework(&self.config)
            .setup(move |_ctx, ready, _framework| {
                Box::pin(async move {
                    info!(
                        user = %ready.user.name,
                        guilds = ready.guilds.len(),
                        "Bot connected"
                    );
                    Ok(Data {
                        config,
                        registrations,
                    })
                })
            })
            .build();

        let mut client = Client::builder(self.config.token.expose(), gateway_intents())
            .framework(framework)
            .await?;

        info!(prefix = %self.config.command_prefix, "Starting Discord client");
        client.start().await?;
        Ok(())
    }
}
