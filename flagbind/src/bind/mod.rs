//! Walks annotated structs and declares their fields as flags.

use crate::bindable::{Bindable, Target};
use crate::error::BindError;
use crate::options::BindOptions;
use crate::registry::Registry;

mod define;
mod walker;

pub use walker::Walker;

/// A struct whose fields can be declared as flags.
///
/// `#[derive(FlagBind)]` implements this by calling [`Walker::field`] for
/// each public field. Implement it by hand to take over flag declaration
/// for a type: the walker exposes the current name prefix and the registry.
/// Hand-written implementations pair with `#[derive(Bindable)]` so the type
/// can appear as a field or a bind target.
///
/// ```
/// use flagbind::{BindError, Bindable, ClapFlagSet, FlagBind, Walker};
///
/// #[derive(Default, Bindable)]
/// struct Endpoint {
///     url: String,
/// }
///
/// impl FlagBind for Endpoint {
///     fn flag_bind<'a>(&'a mut self, walker: &mut Walker<'_, 'a>) -> Result<(), BindError> {
///         let name = format!("{}url", walker.prefix());
///         let default = self.url.clone();
///         walker.flag_set().string_var(&mut self.url, &name, default, "Endpoint URL")?;
///         Ok(())
///     }
/// }
///
/// #[derive(Default, FlagBind)]
/// struct Config {
///     pub upstream: Endpoint,
/// }
///
/// let mut config = Config::default();
/// let mut flags = ClapFlagSet::new("demo");
/// flagbind::bind(&mut flags, &mut config).expect("bind config");
/// assert!(flags.flag("upstream-url").is_some());
/// ```
pub trait FlagBind {
    /// Declares flags for `self` on the walker's registry.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] when a flag cannot be declared.
    fn flag_bind<'a>(&'a mut self, walker: &mut Walker<'_, 'a>) -> Result<(), BindError>;
}

/// Compile-time description of one struct field.
///
/// `ident` is the Rust identifier used in error paths; `name` is the
/// `CamelCase` source of the derived flag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'s> {
    ident: &'s str,
    name: &'s str,
    tag: &'s str,
    usage: &'s [&'s str],
    embedded: bool,
}

impl<'s> FieldSpec<'s> {
    /// Describes a field with no tag.
    #[must_use]
    pub const fn new(ident: &'s str, name: &'s str) -> Self {
        Self {
            ident,
            name,
            tag: "",
            usage: &[],
            embedded: false,
        }
    }

    /// Sets the raw flag tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'s str) -> Self {
        self.tag = tag;
        self
    }

    /// Sets usage continuations appended to the tag's usage.
    #[must_use]
    pub const fn with_usage(mut self, usage: &'s [&'s str]) -> Self {
        self.usage = usage;
        self
    }

    /// Marks the field as embedded: without an explicit name its flags are
    /// not prefixed unless [`BindOptions::no_auto_flatten`] is set.
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Rust identifier of the field.
    #[must_use]
    pub const fn ident(&self) -> &'s str {
        self.ident
    }

    /// `CamelCase` name source.
    #[must_use]
    pub const fn name(&self) -> &'s str {
        self.name
    }

    /// Raw flag tag.
    #[must_use]
    pub const fn tag(&self) -> &'s str {
        self.tag
    }

    /// Usage continuations.
    #[must_use]
    pub const fn usage(&self) -> &'s [&'s str] {
        self.usage
    }

    /// Whether the field is embedded.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}

/// Binds with explicit [`BindOptions`].
///
/// ```
/// use flagbind::{BindOptions, Binder, ClapFlagSet, FlagBind};
///
/// #[derive(Default, FlagBind)]
/// struct Server {
///     pub port: u16,
/// }
///
/// let mut server = Server::default();
/// let mut flags = ClapFlagSet::new("demo");
/// Binder::new(BindOptions::default().with_prefix("http."))
///     .bind(&mut flags, &mut server)
///     .expect("bind server");
/// assert!(flags.flag("http.port").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binder {
    options: BindOptions,
}

impl Binder {
    /// Creates a binder using `options`.
    #[must_use]
    pub const fn new(options: BindOptions) -> Self {
        Self { options }
    }

    /// The options used for every bind.
    #[must_use]
    pub const fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Declares a flag for every bindable field of `target`, then applies
    /// the option overrides.
    ///
    /// The registry keeps mutable borrows of the fields until it is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::InvalidRegistry`] when the registry offers no
    /// flag set, [`BindError::InvalidTarget`] when `target` is not a
    /// struct, and any field or override failure.
    pub fn bind<'a, R, T>(&self, registry: &mut R, target: &'a mut T) -> Result<(), BindError>
    where
        R: Registry<'a> + ?Sized,
        T: Bindable + ?Sized,
    {
        let mut walker = Walker::new(registry, &self.options)?;
        target.prepare();
        let Target::Struct(inner) = target.target() else {
            return Err(BindError::InvalidTarget {
                type_name: std::any::type_name::<T>(),
            });
        };
        inner.flag_bind(&mut walker)?;
        for entry in self.options.overrides() {
            walker.override_flag(entry.tag(), entry.usage())?;
        }
        Ok(())
    }
}

/// Declares a flag for every bindable field of `target` using default
/// options.
///
/// # Errors
///
/// See [`Binder::bind`].
pub fn bind<'a, R, T>(registry: &mut R, target: &'a mut T) -> Result<(), BindError>
where
    R: Registry<'a> + ?Sized,
    T: Bindable + ?Sized,
{
    Binder::default().bind(registry, target)
}
