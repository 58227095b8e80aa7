//! Per-field binding state: the selected flag set, options and name prefix.

use tracing::{debug, trace};

use super::define::define;
use super::{FieldSpec, FlagBind};
use crate::bindable::{Bindable, Target};
use crate::case::{append_separator, from_camel_case};
use crate::error::BindError;
use crate::options::BindOptions;
use crate::registry::{ExtendedFlagSet, FlagSet, Registry};
use crate::tag::FlagTag;

/// The flag set capability chosen for a bind.
pub(super) enum Capability<'w, 'a> {
    Standard(&'w mut dyn FlagSet<'a>),
    Extended(&'w mut dyn ExtendedFlagSet<'a>),
}

impl<'a> Capability<'_, 'a> {
    fn select<'w, R>(registry: &'w mut R) -> Result<Capability<'w, 'a>, BindError>
    where
        R: Registry<'a> + ?Sized,
    {
        if registry.as_extended().is_some() {
            return registry
                .as_extended()
                .map(Capability::Extended)
                .ok_or(BindError::InvalidRegistry);
        }
        registry
            .as_standard()
            .map(Capability::Standard)
            .ok_or(BindError::InvalidRegistry)
    }

    fn reborrow(&mut self) -> Capability<'_, 'a> {
        match self {
            Self::Standard(set) => Capability::Standard(&mut **set),
            Self::Extended(set) => Capability::Extended(&mut **set),
        }
    }

    pub(super) fn flags(&mut self) -> &mut dyn FlagSet<'a> {
        match self {
            Self::Standard(set) => &mut **set,
            Self::Extended(set) => &mut **set,
        }
    }

    pub(super) fn extended(&mut self) -> Option<&mut dyn ExtendedFlagSet<'a>> {
        match self {
            Self::Standard(_) => None,
            Self::Extended(set) => Some(&mut **set),
        }
    }

    const fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }
}

/// Binding state handed to [`FlagBind::flag_bind`].
///
/// A walker holds the selected flag set, the bind options, and the name
/// prefix accumulated from enclosing structs.
pub struct Walker<'w, 'a> {
    flags: Capability<'w, 'a>,
    options: &'w BindOptions,
    prefix: String,
}

impl<'w, 'a> Walker<'w, 'a> {
    pub(super) fn new<R>(registry: &'w mut R, options: &'w BindOptions) -> Result<Self, BindError>
    where
        R: Registry<'a> + ?Sized,
    {
        Ok(Self {
            flags: Capability::select(registry)?,
            options,
            prefix: options.prefix().to_owned(),
        })
    }

    /// Prefix prepended to flag names declared at this level.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Options of the current bind.
    #[must_use]
    pub const fn options(&self) -> &BindOptions {
        self.options
    }

    /// Whether the registry offers the extended flag set.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.flags.is_extended()
    }

    /// The selected flag set, viewed through the standard capability.
    pub fn flag_set(&mut self) -> &mut dyn FlagSet<'a> {
        self.flags.flags()
    }

    /// The extended flag set, when the registry offers it.
    pub fn extended_flag_set(&mut self) -> Option<&mut dyn ExtendedFlagSet<'a>> {
        self.flags.extended()
    }

    /// Declares `field` according to `spec`.
    ///
    /// Ignored fields and unsupported kinds are skipped. Nested structs are
    /// walked with an extended prefix. Leaf fields are registered under the
    /// prefixed name, and a tag default is applied when the field was zero.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Nested`] for failures inside nested structs,
    /// [`BindError::DefaultValue`] when the tag default is rejected, and the
    /// duplicate-name errors raised by the registry.
    pub fn field<T>(&mut self, spec: &FieldSpec<'_>, field: &'a mut T) -> Result<(), BindError>
    where
        T: Bindable + ?Sized,
    {
        let mut tag = FlagTag::parse(spec.tag());
        if tag.ignored {
            trace!(field = spec.ident(), "ignoring field");
            return Ok(());
        }
        if !tag.explicit_name || (self.is_extended() && tag.name == tag.short) {
            tag.name = from_camel_case(spec.name(), self.options.separator());
        }
        tag.extend_usage(spec.usage());

        field.prepare();
        let was_zero = field.is_zero();
        match field.target() {
            Target::Struct(inner) => self.nested(spec, &tag, inner),
            Target::Unsupported => {
                debug!(field = spec.ident(), "skipping field of unsupported type");
                Ok(())
            }
            target => self.leaf(spec, tag, target, was_zero),
        }
    }

    /// Adjusts an already-declared flag.
    ///
    /// The tag's long name selects the flag verbatim, without the current
    /// prefix. A non-empty default is assigned and shown, a non-empty usage
    /// replaces the help text, `hide-default` blanks the shown default and,
    /// on the extended set, `hidden` is applied.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::OverrideUndefined`] when no such flag exists and
    /// [`BindError::DefaultValue`] when the flag rejects the default.
    pub fn override_flag<S>(&mut self, tag: &str, usage: &[S]) -> Result<(), BindError>
    where
        S: AsRef<str>,
    {
        let mut parsed = FlagTag::parse(tag);
        if parsed.ignored {
            return Ok(());
        }
        parsed.extend_usage(usage);

        let flags = self.flags.flags();
        if flags.lookup(&parsed.name).is_none() {
            return Err(BindError::OverrideUndefined { name: parsed.name });
        }
        if !parsed.default.is_empty() {
            flags
                .set(&parsed.name, &parsed.default)
                .map_err(|source| BindError::default_value(&parsed.name, &parsed.default, source))?;
        }
        if let Some(flag) = flags.lookup(&parsed.name) {
            if !parsed.default.is_empty() {
                flag.def_value.clone_from(&parsed.default);
            }
            if !parsed.usage.is_empty() {
                flag.usage.clone_from(&parsed.usage);
            }
            if parsed.hide_default {
                flag.def_value.clear();
            }
        }
        if let Some(flag) = self
            .flags
            .extended()
            .and_then(|set| set.lookup_ext(&parsed.name))
        {
            flag.hidden = parsed.hidden;
        }
        debug!(flag = %parsed.name, "applied override");
        Ok(())
    }

    fn nested(
        &mut self,
        spec: &FieldSpec<'_>,
        tag: &FlagTag,
        inner: &'a mut dyn FlagBind,
    ) -> Result<(), BindError> {
        let mut prefix = self.prefix.clone();
        if !tag.flatten
            && (self.options.is_no_auto_flatten() || !spec.is_embedded() || tag.explicit_name)
        {
            prefix.push_str(&tag.name);
        }
        append_separator(&mut prefix, self.options.separator());

        let mut child = Walker {
            flags: self.flags.reborrow(),
            options: self.options,
            prefix,
        };
        inner
            .flag_bind(&mut child)
            .map_err(|err| BindError::nested(spec.ident(), err))
    }

    fn leaf(
        &mut self,
        spec: &FieldSpec<'_>,
        mut tag: FlagTag,
        target: Target<'a>,
        was_zero: bool,
    ) -> Result<(), BindError> {
        tag.name.insert_str(0, &self.prefix);
        if !define(&mut self.flags, target, &tag)? {
            debug!(flag = %tag.name, "standard flag set has no primitive for field kind");
            return Ok(());
        }
        debug!(flag = %tag.name, field = spec.ident(), "declared flag");

        if was_zero && !tag.default.is_empty() {
            let flags = self.flags.flags();
            flags
                .set(&tag.name, &tag.default)
                .map_err(|source| BindError::default_value(spec.ident(), &tag.default, source))?;
            if !tag.hide_default
                && let Some(flag) = flags.lookup(&tag.name)
            {
                flag.def_value.clone_from(&tag.default);
            }
        }
        Ok(())
    }
}
