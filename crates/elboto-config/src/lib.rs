//! # Elboto Config
//!
//! Validated, immutable configuration loading for Elboto.
//!
//! The settings file is parsed into a permissive raw schema, then validated
//! into a [`Config`] that is never mutated afterwards. Secrets stay wrapped in
//! [`elboto_common::Secret`] so they cannot reach a log line by accident.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
