//! Single-valued flags backed by a borrowed primitive.

use std::fmt;

use super::{Native, Value};
use crate::error::ValueError;

/// Flag value writing into a borrowed primitive.
///
/// ```
/// use flagbind::{Scalar, Value};
///
/// let mut port = 0_u16;
/// let mut value = Scalar::new(&mut port);
/// value.set("8080").expect("valid port");
/// assert_eq!(value.to_string(), "8080");
/// ```
pub struct Scalar<'a, T> {
    target: &'a mut T,
}

impl<'a, T: Native> Scalar<'a, T> {
    /// Wraps `target`.
    #[must_use]
    pub const fn new(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl<T: Native> fmt::Display for Scalar<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target.render_text())
    }
}

impl<T: Native> Value for Scalar<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.target = T::parse_text(text)?;
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.target.is_zero()
    }

    fn is_bool_flag(&self) -> bool {
        T::IS_BOOL
    }

    fn type_name(&self) -> Option<&str> {
        Some(T::TYPE_NAME)
    }
}
