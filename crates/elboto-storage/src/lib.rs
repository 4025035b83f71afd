//! # Elboto Storage
//!
//! Long-term state that survives process restarts.
//!
//! [`RuntimeDir`] owns the directory itself; [`PersistentStore`] keeps one
//! named JSON document inside it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod runtime_dir;
pub mod store;

pub use error::*;
pub use runtime_dir::*;
pub use store::*;
