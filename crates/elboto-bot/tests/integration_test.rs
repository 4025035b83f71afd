//! Integration tests for elboto-bot crate.
//!
//! These cover the startup path up to the point where the Discord client
//! would connect.

use elboto_bot::{gateway_intents, BotError, ElbotoBot};
use elboto_commands::valorant::REGISTRATION_STORE;
use elboto_common::test_utils::{config_fixtures, create_temp_dir, init_test_logging, write_config};
use elboto_config::ConfigLoader;
use elboto_storage::{PersistentStore, RuntimeDir};
use serenity::all::GatewayIntents;

#[test]
fn test_startup_prepares_config_and_runtime_dir() {
    init_test_logging();
    let root = create_temp_dir();
    let config_path = write_config(root.path(), config_fixtures::VALID);

    let config = ConfigLoader::new(config_path).load().unwrap();
    let runtime_dir = RuntimeDir::new(root.path().join("runtime"));
    runtime_dir.ensure().unwrap();
    let registrations = PersistentStore::open(&runtime_dir, REGISTRATION_STORE).unwrap();

    let bot = ElbotoBot::new(config, registrations);
    assert_eq!(bot.config().command_prefix, ">");
    assert!(runtime_dir.path().is_dir());
}

#[test]
fn test_config_failure_is_reported_as_bot_error() {
    let root = create_temp_dir();
    let config_path = write_config(root.path(), config_fixtures::PARTIAL_CREDENTIALS);

    let err: BotError = ConfigLoader::new(config_path).load().unwrap_err().into();
    assert!(matches!(err, BotError::Config(_)));
    assert!(err.to_string().contains("region na"));
}

#[test]
fn test_storage_failure_is_reported_as_bot_error() {
    let root = create_temp_dir();
    let blocked = root.path().join("runtime");
    std::fs::write(&blocked, "file in the way").unwrap();

    let err: BotError = RuntimeDir::new(&blocked).ensure().unwrap_err().into();
    assert!(matches!(err, BotError::Storage(_)));
}

#[test]
fn test_gateway_intents() {
    let intents = gateway_intents();
    assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
    assert!(!intents.contains(GatewayIntents::GUILD_MESSAGE_TYPING));
    assert!(!intents.contains(GatewayIntents::DIRECT_MESSAGE_TYPING));
    assert!(!intents.contains(GatewayIntents::GUILD_PRESENCES));
}
