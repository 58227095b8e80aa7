//! Flag registry abstractions.
//!
//! A registry is anything that can record flag declarations. Two capability
//! levels exist:
//!
//! * [`FlagSet`], the standard set: long names only, one primitive per kind.
//! * [`ExtendedFlagSet`], which adds single-character short names, hidden
//!   flags, type labels, `f32`, IP addresses and list kinds.
//!
//! The binder reaches either capability through [`Registry`], preferring the
//! extended one.

use std::net::IpAddr;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crate::error::RegistryError;
use crate::value::{List, Native, Scalar, Value, ensure_typed};

mod clap_set;

pub use clap_set::ClapFlagSet;

/// Metadata of a declared flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    /// Long name.
    pub name: String,
    /// Help text.
    pub usage: String,
    /// Default shown in help output; empty hides it.
    pub def_value: String,
}

/// Metadata of a flag declared on an [`ExtendedFlagSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtFlag {
    /// Standard metadata.
    pub flag: Flag,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Omit from help output.
    pub hidden: bool,
    /// Type label shown in help output.
    pub type_name: String,
}

impl Deref for ExtFlag {
    type Target = Flag;

    fn deref(&self) -> &Self::Target {
        &self.flag
    }
}

impl DerefMut for ExtFlag {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.flag
    }
}

/// Assigns `default` to `target` and wraps it as a scalar flag value.
fn scalar<'a, T: Native>(target: &'a mut T, default: T) -> Box<dyn Value + 'a> {
    *target = default;
    Box::new(Scalar::new(target))
}

/// Assigns `default` to `target` and wraps it as a list flag value.
fn list<'a, T: Native>(target: &'a mut Vec<T>, default: Vec<T>) -> Box<dyn Value + 'a> {
    *target = default;
    Box::new(List::new(target))
}

/// The standard flag set: long names, help text, and a display default.
///
/// Only [`FlagSet::var`], [`FlagSet::lookup`] and [`FlagSet::set`] are
/// required; the per-kind primitives assign the default and delegate to
/// `var`. Values registered with lifetime `'a` may write into the borrowed
/// fields until the set is dropped.
pub trait FlagSet<'a> {
    /// Declares a flag holding `value`. The current rendering of `value`
    /// becomes the display default.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Redefined`] when `name` is already declared.
    fn var(&mut self, value: Box<dyn Value + 'a>, name: &str, usage: &str)
    -> Result<(), RegistryError>;

    /// Finds a declared flag.
    fn lookup(&mut self, name: &str) -> Option<&mut Flag>;

    /// Sets a declared flag from text, as though it appeared on the command
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UndefinedFlag`] for unknown names and
    /// [`RegistryError::InvalidValue`] when the value rejects `value`.
    fn set(&mut self, name: &str, value: &str) -> Result<(), RegistryError>;

    /// Declares a `bool` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn bool_var(
        &mut self,
        target: &'a mut bool,
        name: &str,
        default: bool,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares an `isize` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn int_var(
        &mut self,
        target: &'a mut isize,
        name: &str,
        default: isize,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares a `usize` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn uint_var(
        &mut self,
        target: &'a mut usize,
        name: &str,
        default: usize,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares an `i64` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn int64_var(
        &mut self,
        target: &'a mut i64,
        name: &str,
        default: i64,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares a `u64` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn uint64_var(
        &mut self,
        target: &'a mut u64,
        name: &str,
        default: u64,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares an `f64` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn float64_var(
        &mut self,
        target: &'a mut f64,
        name: &str,
        default: f64,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares a `String` flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn string_var(
        &mut self,
        target: &'a mut String,
        name: &str,
        default: String,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }

    /// Declares a [`Duration`] flag.
    ///
    /// # Errors
    ///
    /// Propagates [`FlagSet::var`] failures.
    fn duration_var(
        &mut self,
        target: &'a mut Duration,
        name: &str,
        default: Duration,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var(scalar(target, default), name, usage)
    }
}

macro_rules! extended_primitives {
    ($($(#[$doc:meta])* $method:ident($target:ty);)*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Propagates [`ExtendedFlagSet::var_p`] failures.
            fn $method(
                &mut self,
                target: &'a mut $target,
                name: &str,
                short: Option<char>,
                default: $target,
                usage: &str,
            ) -> Result<(), RegistryError> {
                self.var_p(scalar(target, default), name, short, usage)
            }
        )*
    };
}

macro_rules! extended_lists {
    ($($(#[$doc:meta])* $method:ident($item:ty);)*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Propagates [`ExtendedFlagSet::var_p`] failures.
            fn $method(
                &mut self,
                target: &'a mut Vec<$item>,
                name: &str,
                short: Option<char>,
                default: Vec<$item>,
                usage: &str,
            ) -> Result<(), RegistryError> {
                self.var_p(list(target, default), name, short, usage)
            }
        )*
    };
}

/// The extended flag set: short names, hidden flags, type labels, and the
/// wider range of kinds.
pub trait ExtendedFlagSet<'a>: FlagSet<'a> {
    /// Declares a flag with an optional short name. The value's
    /// [`Value::type_name`] becomes the flag's type label.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Redefined`] when `name` is taken and
    /// [`RegistryError::ShorthandRedefined`] when `short` is taken.
    fn var_p(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        short: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError>;

    /// Finds a declared flag with its extended metadata.
    fn lookup_ext(&mut self, name: &str) -> Option<&mut ExtFlag>;

    /// Declares a flag from a value without a type label, attaching
    /// `type_name` when the value does not declare one.
    ///
    /// # Errors
    ///
    /// Propagates [`ExtendedFlagSet::var_p`] failures.
    fn var_typed(
        &mut self,
        value: Box<dyn Value + 'a>,
        type_name: &'static str,
        name: &str,
        short: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.var_p(ensure_typed(value, type_name), name, short, usage)
    }

    extended_primitives! {
        /// Declares a `bool` flag.
        bool_var_p(bool);
        /// Declares an `isize` flag.
        int_var_p(isize);
        /// Declares a `usize` flag.
        uint_var_p(usize);
        /// Declares an `i64` flag.
        int64_var_p(i64);
        /// Declares a `u64` flag.
        uint64_var_p(u64);
        /// Declares an `f32` flag.
        float32_var_p(f32);
        /// Declares an `f64` flag.
        float64_var_p(f64);
        /// Declares a `String` flag.
        string_var_p(String);
        /// Declares a [`Duration`] flag.
        duration_var_p(Duration);
        /// Declares an [`IpAddr`] flag.
        ip_var_p(IpAddr);
    }

    extended_lists! {
        /// Declares a list of `bool` values.
        bool_slice_var_p(bool);
        /// Declares a list of `isize` values.
        int_slice_var_p(isize);
        /// Declares a list of `i64` values.
        int64_slice_var_p(i64);
        /// Declares a list of `usize` values.
        uint_slice_var_p(usize);
        /// Declares a list of `f32` values.
        float32_slice_var_p(f32);
        /// Declares a list of `f64` values.
        float64_slice_var_p(f64);
        /// Declares a list of `String` values.
        string_slice_var_p(String);
        /// Declares a list of [`Duration`] values.
        duration_slice_var_p(Duration);
        /// Declares a list of [`IpAddr`] values.
        ip_slice_var_p(IpAddr);
    }
}

/// Access to the capability levels of a flag registry.
///
/// Implement whichever accessors the registry supports; the binder uses the
/// extended set when available and fails with
/// [`crate::BindError::InvalidRegistry`] when neither is.
pub trait Registry<'a> {
    /// The extended flag set, if supported.
    fn as_extended(&mut self) -> Option<&mut dyn ExtendedFlagSet<'a>> {
        None
    }

    /// The standard flag set, if supported.
    fn as_standard(&mut self) -> Option<&mut dyn FlagSet<'a>> {
        None
    }
}

#[cfg(test)]
mod tests;
