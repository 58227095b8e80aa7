//! Flag values for any type with `FromStr` and `Display`.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::Value;
use crate::error::ValueError;

/// Binds any `FromStr + Display` type as a flag.
///
/// The wrapped value is zero until it is first set, so a tag default applies
/// even though `T` has no zero value of its own.
///
/// ```
/// use std::net::SocketAddr;
/// use flagbind::{Parsed, Value};
///
/// let mut listen: Parsed<SocketAddr> = Parsed::default();
/// assert!(listen.is_zero());
/// listen.set("127.0.0.1:8080").expect("valid socket address");
/// assert_eq!(listen.to_string(), "127.0.0.1:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T>(Option<T>);

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Parsed<T> {
    /// Wraps an initial value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Returns the parsed value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Deref for Parsed<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Parsed<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: fmt::Display> fmt::Display for Parsed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

impl<T> Value for Parsed<T>
where
    T: FromStr + fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        let value = text.parse().map_err(|err| ValueError::parse(text, err))?;
        self.0 = Some(value);
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    fn type_name(&self) -> Option<&str> {
        Some(super::short_type_name::<T>())
    }
}
