//! Test helpers shared across crates in the `flagbind` workspace.

pub mod registry;
pub mod separator;
pub mod text;
