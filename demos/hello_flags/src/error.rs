//! Error types for the `hello_flags` demo.

use std::io;

use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum HelloFlagsError {
    /// Declaring the flags failed.
    #[error("failed to declare flags: {0}")]
    Bind(#[from] flagbind::BindError),
    /// The command line was rejected.
    #[error(transparent)]
    Parse(#[from] flagbind::ParseError),
    /// The parsed options are unusable.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Problems found in the parsed options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A recipient was blank after trimming.
    #[error("recipients must contain visible characters")]
    BlankRecipient,
    /// The salutation was blank after trimming.
    #[error("the salutation must contain visible characters")]
    BlankSalutation,
    /// `--repeat 0` would print nothing.
    #[error("--repeat must be greater than zero")]
    ZeroRepeat,
}

/// Result alias for the demo.
pub type Result<T, E = HelloFlagsError> = std::result::Result<T, E>;
