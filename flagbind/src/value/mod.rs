//! Flag value capabilities and the built-in value kinds.
//!
//! [`Value`] is the text capability every registered flag holds: it accepts
//! command-line text through [`Value::set`] and renders its current state
//! through [`std::fmt::Display`]. Extended registries additionally show a
//! type label, supplied through [`Value::type_name`] or attached with
//! [`Typed`].

use std::fmt;

use crate::error::ValueError;

mod duration;
#[cfg(feature = "serde_json")]
mod json;
mod list;
mod native;
mod parsed;
mod scalar;

pub use duration::{DurationError, format_duration, parse_duration};
#[cfg(feature = "serde_json")]
pub use json::JsonRawMessage;
pub use list::List;
pub use native::Native;
pub use parsed::Parsed;
pub use scalar::Scalar;

/// A flag value that can be set from text and rendered back.
///
/// Implement this for custom field types to make them bindable.
///
/// ```
/// use std::fmt;
/// use flagbind::{Value, ValueError};
///
/// #[derive(Default)]
/// struct Level(u8);
///
/// impl fmt::Display for Level {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Value for Level {
///     fn set(&mut self, text: &str) -> Result<(), ValueError> {
///         let level: u8 = text.parse().map_err(|e| ValueError::parse(text, e))?;
///         if level > 3 {
///             return Err(ValueError::invalid("level must be at most 3"));
///         }
///         self.0 = level;
///         Ok(())
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0
///     }
/// }
/// ```
pub trait Value: fmt::Display {
    /// Replaces or extends the value from command-line text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `text` is not acceptable.
    fn set(&mut self, text: &str) -> Result<(), ValueError>;

    /// Whether the value is in its zero state; tag defaults only apply to
    /// zero values.
    fn is_zero(&self) -> bool {
        self.to_string().is_empty()
    }

    /// Whether the flag may be given without an argument.
    fn is_bool_flag(&self) -> bool {
        false
    }

    /// Type label for extended registries, when the value declares one.
    fn type_name(&self) -> Option<&str> {
        None
    }
}

impl<V: Value + ?Sized> Value for &mut V {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }

    fn type_name(&self) -> Option<&str> {
        (**self).type_name()
    }
}

impl<V: Value + ?Sized> Value for Box<V> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }

    fn type_name(&self) -> Option<&str> {
        (**self).type_name()
    }
}

/// Attaches a fixed type label to a value that lacks one.
pub struct Typed<V> {
    inner: V,
    type_name: &'static str,
}

impl<V: Value> Typed<V> {
    /// Wraps `inner`, reporting `type_name` to extended registries.
    #[must_use]
    pub const fn new(inner: V, type_name: &'static str) -> Self {
        Self { inner, type_name }
    }
}

/// Returns `value` unchanged when it already declares a type label, otherwise
/// wraps it in [`Typed`] with `fallback`.
#[must_use]
pub fn ensure_typed<'a>(value: Box<dyn Value + 'a>, fallback: &'static str) -> Box<dyn Value + 'a> {
    if value.type_name().is_some() {
        value
    } else {
        Box::new(Typed::new(value, fallback))
    }
}

impl<V: Value> fmt::Display for Typed<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<V: Value> Value for Typed<V> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        self.inner.set(text)
    }

    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    fn is_bool_flag(&self) -> bool {
        self.inner.is_bool_flag()
    }

    fn type_name(&self) -> Option<&str> {
        Some(self.type_name)
    }
}

/// The last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
