//! Constructors and conversions for [`BindError`].

use super::{BindError, RegistryError, ValueError};

impl BindError {
    /// Wraps an error raised inside the nested struct stored in `field`.
    #[must_use]
    pub fn nested(field: impl Into<String>, source: Self) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Builds a [`BindError::DefaultValue`].
    #[must_use]
    pub fn default_value(
        field: impl Into<String>,
        value: impl Into<String>,
        source: RegistryError,
    ) -> Self {
        Self::DefaultValue {
            field: field.into(),
            value: value.into(),
            source,
        }
    }

    /// Returns the dotted field path of nested failures, for example
    /// `Outer.Inner.Leaf` for a default value failure two structs deep.
    #[must_use]
    pub fn field_path(&self) -> Option<String> {
        match self {
            Self::Nested { field, source } => Some(
                source
                    .field_path()
                    .map_or_else(|| field.clone(), |inner| format!("{field}.{inner}")),
            ),
            Self::DefaultValue { field, .. } => Some(field.clone()),
            _ => None,
        }
    }

    /// Returns the innermost error, looking through every nesting level.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<RegistryError> for BindError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Redefined { name } => Self::DuplicateFlag { name },
            RegistryError::ShorthandRedefined {
                short,
                name,
                existing,
            } => Self::DuplicateShorthand {
                short,
                name,
                existing,
            },
            other => Self::Registry(other),
        }
    }
}

impl ValueError {
    /// Wraps a parser error together with the rejected text.
    #[must_use]
    pub fn parse<E>(text: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            text: text.into(),
            source: Box::new(source),
        }
    }

    /// Builds a [`ValueError::Invalid`] from a message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl RegistryError {
    /// Builds a [`RegistryError::InvalidValue`].
    #[must_use]
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        source: ValueError,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            source,
        }
    }
}
