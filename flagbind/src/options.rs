//! Binding configuration: separator, prefix, flattening policy and overrides.

use std::borrow::Cow;
use std::sync::LazyLock;

use parking_lot::RwLock;

const DEFAULT_SEPARATOR: &str = "-";

static SEPARATOR: LazyLock<RwLock<Cow<'static, str>>> =
    LazyLock::new(|| RwLock::new(Cow::Borrowed(DEFAULT_SEPARATOR)));

/// Sets the process-wide separator used by [`BindOptions::default`].
///
/// The separator joins words of derived names and nested prefixes. Options
/// built before the call keep the separator they captured.
///
/// # Examples
///
/// ```
/// flagbind::set_separator("_");
/// assert_eq!(flagbind::separator(), "_");
/// flagbind::set_separator("-");
/// ```
pub fn set_separator(sep: impl Into<Cow<'static, str>>) {
    *SEPARATOR.write() = sep.into();
}

/// Returns the current process-wide separator.
#[must_use]
pub fn separator() -> String {
    SEPARATOR.read().to_string()
}

/// Options controlling a single bind call.
///
/// ```
/// use flagbind::{BindOptions, Override};
///
/// let options = BindOptions::default()
///     .with_prefix("http")
///     .no_auto_flatten()
///     .with_override(Override::new("http-port;8080"));
/// assert_eq!(options.prefix(), "http");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    separator: String,
    prefix: String,
    no_auto_flatten: bool,
    overrides: Vec<Override>,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            separator: separator(),
            prefix: String::new(),
            no_auto_flatten: false,
            overrides: Vec::new(),
        }
    }
}

impl BindOptions {
    /// Uses `sep` instead of the process-wide separator.
    #[must_use]
    pub fn with_separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Prefixes every flag name with `prefix`.
    ///
    /// The prefix is used verbatim, so include any trailing separator you
    /// want, for example `http-`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Prefixes the flags of embedded fields with their type name unless the
    /// field is explicitly flattened.
    #[must_use]
    pub const fn no_auto_flatten(mut self) -> Self {
        self.no_auto_flatten = true;
        self
    }

    /// Adds an override applied after all fields have been bound.
    #[must_use]
    pub fn with_override(mut self, entry: Override) -> Self {
        self.overrides.push(entry);
        self
    }

    /// Separator used for derived names and nested prefixes.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Initial flag name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether embedded fields are prefixed by default.
    #[must_use]
    pub const fn is_no_auto_flatten(&self) -> bool {
        self.no_auto_flatten
    }

    /// Overrides in application order.
    #[must_use]
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }
}

/// Adjusts an already-declared flag.
///
/// The tag uses the usual grammar; its name selects the flag, a non-empty
/// default is assigned, a non-empty usage replaces the help text, and the
/// `hidden` and `hide-default` options apply to the existing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    tag: String,
    usage: Vec<String>,
}

impl Override {
    /// Creates an override from a tag string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            usage: Vec::new(),
        }
    }

    /// Appends a usage continuation.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.push(usage.into());
        self
    }

    /// Raw override tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Usage continuations.
    #[must_use]
    pub fn usage(&self) -> &[String] {
        &self.usage
    }
}
