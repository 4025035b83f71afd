//! Integration tests for elboto-commands crate.
//!
//! These exercise command registration and the pure helpers behind the
//! commands; nothing here talks to Discord.

use elboto_common::test_utils::{create_temp_dir, init_test_logging};
use elboto_common::{Region, RoleIdentifier};
use elboto_commands::admin::{invite_permissions, invite_url};
use elboto_commands::permissions::{has_access_role, MemberRole};
use elboto_commands::valorant::{format_registrations, Registration, REGISTRATION_STORE};
use elboto_commands::{commands, framework_options};
use elboto_storage::{PersistentStore, RuntimeDir};

fn find<'a>(
    commands: &'a [poise::Command<elboto_commands::Data, elboto_commands::Error>],
    name: &str,
) -> &'a poise::Command<elboto_commands::Data, elboto_commands::Error> {
    commands
        .iter()
        .find(|command| command.name == name)
        .unwrap_or_else(|| panic!("command {name} not registered"))
}

#[test]
fn test_command_registration() {
    init_test_logging();
    let commands = commands();

    let hello = find(&commands, "hello");
    for alias in ["hi", "ping", "hey", "whatsup", "yo", "poke"] {
        assert!(hello.aliases.iter().any(|a| a == alias), "missing alias {alias}");
    }

    let join = find(&commands, "join");
    assert!(join.aliases.iter().any(|a| a == "invite"));

    let valo = find(&commands, "valo");
    assert!(valo.aliases.iter().any(|a| a == "val"));
    assert!(valo.aliases.iter().any(|a| a == "valorant"));
    assert!(!valo.checks.is_empty());

    let register = find(&valo.subcommands, "register_puuid");
    assert!(register.hide_in_help);

    let admin = find(&valo.subcommands, "admin");
    assert!(admin.owners_only);
    let list = find(&admin.subcommands, "list");
    assert!(list.owners_only);
}

#[test]
fn test_framework_uses_configured_prefix() {
    let options = framework_options(">");
    assert_eq!(options.prefix_options.prefix.as_deref(), Some(">"));
    assert_eq!(options.commands.len(), commands().len());
}

#[test]
fn test_access_role_matching() {
    let member_roles = vec![
        MemberRole { id: 42, name: "Everyone Else".to_string() },
        MemberRole { id: 7, name: "Mods".to_string() },
    ];

    assert!(has_access_role(&member_roles, &[RoleIdentifier::Id(42)]));
    assert!(has_access_role(&member_roles, &[RoleIdentifier::Name("Mods".to_string())]));
    assert!(!has_access_role(
        &member_roles,
        &[RoleIdentifier::Id(8), RoleIdentifier::Name("Admins".to_string())]
    ));
}

#[test]
fn test_invite_url_for_client_id() {
    let url = invite_url("abc123", invite_permissions()).unwrap();
    assert_eq!(
        url.as_str(),
        "https://discord.com/oauth2/authorize?client_id=abc123&scope=bot&permissions=117824"
    );
}

#[test]
fn test_registrations_listing_from_store() {
    let root = create_temp_dir();
    let store = PersistentStore::open(&RuntimeDir::new(root.path()), REGISTRATION_STORE).unwrap();
    let register = |nametag: &str, region: Region| {
        store
            .insert(nametag, &Registration { region, puuid: format!("puuid-{nametag}") })
            .unwrap();
    };
    register("zed#NA1", Region::Na);
    register("amy#EUW", Region::Eu);
    register("bob#NA2", Region::Na);

    let registrations = store.entries::<Registration>().unwrap();

    assert_eq!(
        format_registrations(&registrations, None),
        "All registrations:\n`amy#EUW`\n`bob#NA2`\n`zed#NA1`"
    );
    assert_eq!(
        format_registrations(&registrations, Some(Region::Na)),
        "Registrations in NA:\n`bob#NA2`\n`zed#NA1`"
    );
    assert_eq!(
        format_registrations(&registrations, Some(Region::Ko)),
        "Registrations in KO:\nNo registered nametags"
    );
}
