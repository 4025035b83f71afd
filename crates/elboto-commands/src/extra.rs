//! Small social commands.

use crate::framework::{react, Context, Error};

/// Says hi back.
#[poise::command(prefix_command, aliases("hi", "ping", "hey", "whatsup", "yo", "poke"))]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    react(ctx, '🖖').await
}
