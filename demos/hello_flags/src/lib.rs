//! Library facade for the `hello_flags` demo so tests can reuse the
//! configuration types and the greeting plan.

pub mod config;
pub mod error;
pub mod greeting;
