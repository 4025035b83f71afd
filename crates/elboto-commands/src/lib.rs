//! # Elboto Commands
//!
//! Prefix command implementations using the Poise framework.
//!
//! Commands read the shared [`Data`] for configuration and the Valorant
//! registration store; role-gated access lives in [`permissions`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod admin;
pub mod extra;
pub mod framework;
pub mod permissions;
pub mod valorant;

pub use framework::*;
