//! # Elboto Bot
//!
//! Eloston's Discord bot.
//!
//! This is the main binary crate: it loads the configuration, prepares the
//! runtime directory, and hands control to serenity with the Poise command
//! framework.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
