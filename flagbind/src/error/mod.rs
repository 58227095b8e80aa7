//! Error types produced while binding and parsing flags.

mod constructors;
mod types;

pub use types::{BindError, ParseError, RegistryError, ValueError};

#[cfg(test)]
mod tests;
