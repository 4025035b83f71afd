//! Bot administration commands.

use crate::framework::{Context, Error};
use poise::serenity_prelude::Permissions;
use url::Url;

const OAUTH_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Permissions requested when the bot is invited to a server.
#[must_use]
pub fn invite_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::EMBED_LINKS
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::ATTACH_FILES
        | Permissions::ADD_REACTIONS
}

/// Builds the OAuth2 bot invite URL for `client_id`.
pub fn invite_url(client_id: &str, permissions: Permissions) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(OAUTH_AUTHORIZE_URL)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("scope", "bot")
        .append_pair("permissions", &permissions.bits().to_string());
    Ok(url)
}

/// Joins a server.
#[poise::command(prefix_command, aliases("invite"))]
pub async fn join(ctx: Context<'_>) -> Result<(), Error> {
    let url = invite_url(&ctx.data().config.client_id, invite_permissions())?;
    ctx.say(format!("<{url}>")).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_permissions_bits() {
        assert_eq!(invite_permissions().bits(), 117_824);
    }

    #[test]
    fn test_invite_url_escapes_client_id() {
        let url = invite_url("a b&c", Permissions::empty()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://discord.com/oauth2/authorize?client_id=a+b%26c&scope=bot&permissions=0"
        );
    }
}
