//! # Elboto Common
//!
//! Shared types, utilities, and logging setup for Elboto.
//!
//! This crate provides the domain vocabulary (regions, role identifiers,
//! secrets, nametags) used across every other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use types::*;
pub use utils::*;
