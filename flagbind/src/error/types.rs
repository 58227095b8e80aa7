//! Error enums for the binder, the registries and individual values.

use thiserror::Error;

/// Errors returned by [`crate::bind`] and [`crate::Binder::bind`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// The bind target is not a struct.
    #[error("target must be a struct, got `{type_name}`")]
    InvalidTarget {
        /// Rust type name of the rejected target.
        type_name: &'static str,
    },

    /// The registry exposes neither the standard nor the extended flag set.
    #[error("registry supports neither the standard nor the extended flag set")]
    InvalidRegistry,

    /// An error raised while binding the fields of a nested struct.
    ///
    /// Each level of nesting adds one wrapper; [`BindError::field_path`]
    /// joins them into a dotted path.
    #[error("{field}: {source}")]
    Nested {
        /// Identifier of the enclosing struct field.
        field: String,
        /// Error raised inside the nested struct.
        #[source]
        source: Box<Self>,
    },

    /// The registry rejected a tag default.
    #[error("{field}: cannot assign default value from tag: {value:?}")]
    DefaultValue {
        /// Field identifier carrying the default.
        field: String,
        /// Default literal from the tag.
        value: String,
        /// Registry failure.
        #[source]
        source: RegistryError,
    },

    /// Two fields resolved to the same long flag name.
    #[error("flag redefined: {name}")]
    DuplicateFlag {
        /// Long flag name declared twice.
        name: String,
    },

    /// Two flags claimed the same short name.
    #[error("unable to redefine {short:?} shorthand in {name:?}: it's already used for {existing:?} flag")]
    DuplicateShorthand {
        /// Contested short name.
        short: char,
        /// Flag whose registration failed.
        name: String,
        /// Flag already holding the short name.
        existing: String,
    },

    /// An override named a flag that was never declared.
    #[error("cannot override undefined flag: {name}")]
    OverrideUndefined {
        /// Flag name from the override tag.
        name: String,
    },

    /// Any other registry failure.
    #[error(transparent)]
    Registry(RegistryError),
}

/// Errors raised by flag registries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A flag with this long name already exists.
    #[error("flag redefined: {name}")]
    Redefined {
        /// Long flag name.
        name: String,
    },

    /// A flag with this short name already exists.
    #[error("unable to redefine {short:?} shorthand in {name:?}: it's already used for {existing:?} flag")]
    ShorthandRedefined {
        /// Contested short name.
        short: char,
        /// Flag whose registration failed.
        name: String,
        /// Flag already holding the short name.
        existing: String,
    },

    /// The named flag does not exist.
    #[error("no such flag -{name}")]
    UndefinedFlag {
        /// Requested flag name.
        name: String,
    },

    /// The flag rejected a textual value.
    #[error("invalid value {value:?} for flag -{name}: {source}")]
    InvalidValue {
        /// Flag name.
        name: String,
        /// Rejected text.
        value: String,
        /// Parse failure reported by the value.
        #[source]
        source: ValueError,
    },
}

/// Errors raised when a flag value rejects its textual form.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The text could not be parsed.
    #[error("parse error for {text:?}: {source}")]
    Parse {
        /// Text that failed to parse.
        text: String,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The text parsed but is not acceptable.
    #[error("{0}")]
    Invalid(String),
}

/// Errors returned when parsing command-line arguments with
/// [`crate::ClapFlagSet::parse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Clap rejected the arguments.
    #[error("failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),

    /// An argument for the named flag is not valid UTF-8.
    #[error("argument for flag {name} is not valid UTF-8")]
    NonUtf8 {
        /// Flag name.
        name: String,
    },

    /// A bound value rejected its argument.
    #[error(transparent)]
    Value(#[from] RegistryError),
}
