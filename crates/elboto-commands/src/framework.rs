//! Poise framework setup and command registration logic.

use elboto_config::Config;
use elboto_storage::PersistentStore;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Valorant nametag registrations.
    pub registrations: Arc<PersistentStore>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot serves.
#[must_use]
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::admin::join(),
        crate::extra::hello(),
        crate::valorant::valo(),
    ]
}

/// Framework options for the given command prefix.
#[must_use]
pub fn framework_options(prefix: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.to_string()),
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

/// Creates a new Poise framework using the configured prefix.
#[must_use]
pub fn create_framework(config: &Config) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(&config.command_prefix))
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                error = %error,
                "Command failed"
            );
            if let Err(e) = ctx.reply(error.to_string()).await {
                warn!(error = %e, "Failed to report command error");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling framework error");
            }
        }
    }
}

/// Reacts to the invoking message, or replies with the emoji for non-prefix invocations.
pub async fn react(ctx: Context<'_>, emoji: char) -> Result<(), Error> {
    match ctx {
        poise::Context::Prefix(prefix) => {
            prefix
                .msg
                .react(ctx.serenity_context(), serenity::ReactionType::from(emoji))
                .await?;
        }
        poise::Context::Application(_) => {
            ctx.say(emoji.to_string()).await?;
        }
    }
    Ok(())
}
