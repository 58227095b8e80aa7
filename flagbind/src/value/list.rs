//! Comma-separated list flags backed by a borrowed vector.

use std::fmt;

use super::{Native, Value};
use crate::error::ValueError;

/// Flag value collecting comma-separated items into a borrowed vector.
///
/// The first [`Value::set`] replaces the initial contents; later calls
/// append, so repeating a flag accumulates items.
///
/// ```
/// use flagbind::{List, Value};
///
/// let mut hosts = vec!["localhost".to_owned()];
/// let mut value = List::new(&mut hosts);
/// value.set("a,b").expect("strings always parse");
/// value.set("c").expect("strings always parse");
/// assert_eq!(value.to_string(), "[a,b,c]");
/// ```
pub struct List<'a, T> {
    target: &'a mut Vec<T>,
    changed: bool,
}

impl<'a, T: Native> List<'a, T> {
    /// Wraps `target`.
    #[must_use]
    pub const fn new(target: &'a mut Vec<T>) -> Self {
        Self {
            target,
            changed: false,
        }
    }
}

impl<T: Native> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.target.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(&item.render_text())?;
        }
        f.write_str("]")
    }
}

impl<T: Native> Value for List<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        let items = if text.is_empty() {
            Vec::new()
        } else {
            text.split(',')
                .map(T::parse_text)
                .collect::<Result<Vec<_>, _>>()?
        };
        if self.changed {
            self.target.extend(items);
        } else {
            *self.target = items;
            self.changed = true;
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.target.is_empty()
    }

    fn type_name(&self) -> Option<&str> {
        Some(T::LIST_TYPE_NAME)
    }
}
