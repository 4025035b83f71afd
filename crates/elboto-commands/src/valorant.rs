//! Valorant nametag registration commands.
//!
//! Registrations map a Riot nametag (`name#tag`) to the region and PUUID of
//! the account and are kept in the `valorant` persistent store.

use crate::framework::{react, Context, Error};
use crate::permissions::valorant_access;
use elboto_common::{split_nametag, Region};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Name of the persistent store holding registrations.
pub const REGISTRATION_STORE: &str = "valorant";

/// A registered Valorant account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Region the account plays in.
    pub region: Region,
    /// Riot PUUID of the account.
    pub puuid: String,
}

/// Renders the registration listing, optionally restricted to one region.
#[must_use]
pub fn format_registrations(registrations: &[(String, Registration)], region: Option<Region>) -> String {
    let header = region.map_or_else(
        || "All registrations:\n".to_string(),
        |region| format!("Registrations in {}:\n", region.as_str().to_uppercase()),
    );

    let mut nametags: Vec<&str> = registrations
        .iter()
        .filter(|(_, registration)| region.map_or(true, |r| registration.region == r))
        .map(|(nametag, _)| nametag.as_str())
        .collect();
    nametags.sort_unstable();

    if nametags.is_empty() {
        return header + "No registered nametags";
    }
    let body = nametags
        .iter()
        .map(|nametag| format!("`{nametag}`"))
        .collect::<Vec<_>>()
        .join("\n");
    header + &body
}

/// Valorant commands.
#[poise::command(
    prefix_command,
    aliases("valorant", "val"),
    subcommands("register_puuid", "admin"),
    check = "valorant_access"
)]
pub async fn valo(ctx: Context<'_>) -> Result<(), Error> {
    ctx.reply("valo: Invalid subcommand").await?;
    Ok(())
}

/// Registers a nametag with a known region and PUUID.
#[poise::command(prefix_command, hide_in_help, check = "valorant_access")]
pub async fn register_puuid(
    ctx: Context<'_>,
    #[description = "Riot ID as name#tag"] nametag: String,
    #[description = "Account region"] region: Region,
    #[description = "Account PUUID"] puuid: String,
) -> Result<(), Error> {
    if let Err(err) = split_nametag(&nametag) {
        ctx.reply(format!("Invalid nametag: `{err}`")).await?;
        return Ok(());
    }

    ctx.data()
        .registrations
        .insert(&nametag, &Registration { region, puuid })?;
    info!(nametag = %nametag, region = %region, "Registered Valorant account");

    react(ctx, '👌').await
}

/// Owner-only Valorant administration.
#[poise::command(
    prefix_command,
    hide_in_help,
    owners_only,
    subcommands("list"),
    check = "valorant_access"
)]
pub async fn admin(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Lists registered nametags, optionally for one region.
#[poise::command(prefix_command, owners_only, check = "valorant_access")]
pub async fn list(
    ctx: Context<'_>,
    #[description = "Only show this region"] region: Option<Region>,
) -> Result<(), Error> {
    let registrations = ctx.data().registrations.entries::<Registration>()?;
    ctx.reply(format_registrations(&registrations, region)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(region: Region) -> Registration {
        Registration {
            region,
            puuid: "puuid".to_string(),
        }
    }

    #[test]
    fn test_registration_json_shape() {
        let json = serde_json::to_value(Registration {
            region: Region::Na,
            puuid: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "region": "na", "puuid": "abc" }));
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(
            format_registrations(&[], None),
            "All registrations:\nNo registered nametags"
        );
        assert_eq!(
            format_registrations(&[("a#1".to_string(), registration(Region::Na))], Some(Region::Eu)),
            "Registrations in EU:\nNo registered nametags"
        );
    }
}
