//! Access checks for the role-gated Valorant commands.

use crate::framework::{Context, Error};
use elboto_common::RoleIdentifier;
use tracing::debug;

/// A role held by the invoking guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRole {
    /// Role ID.
    pub id: u64,
    /// Role display name.
    pub name: String,
}

/// Returns true if any of the member's roles is listed in `access_roles`.
#[must_use]
pub fn has_access_role(member_roles: &[MemberRole], access_roles: &[RoleIdentifier]) -> bool {
    access_roles.iter().any(|access| {
        member_roles
            .iter()
            .any(|role| access.matches(role.id, &role.name))
    })
}

/// Poise check: bot owners, the guild owner, and members holding an access role pass.
pub async fn valorant_access(ctx: Context<'_>) -> Result<bool, Error> {
    let author = ctx.author().id;
    if ctx.framework().options().owners.contains(&author) {
        return Ok(true);
    }

    let Some(guild_owner) = ctx.guild().map(|guild| guild.owner_id) else {
        return Ok(false);
    };
    if guild_owner == author {
        return Ok(true);
    }

    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };
    let member_roles: Vec<MemberRole> = match ctx.guild() {
        Some(guild) => member
            .roles
            .iter()
            .filter_map(|role_id| guild.roles.get(role_id))
            .map(|role| MemberRole {
                id: role.id.get(),
                name: role.name.clone(),
            })
            .collect(),
        None => return Ok(false),
    };

    let allowed = has_access_role(&member_roles, &ctx.data().config.valorant_access_roles);
    if !allowed {
        debug!(user = %author, "Denied access to Valorant commands");
    }
    Ok(allowed)
}
