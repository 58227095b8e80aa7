//! Parser for the flag tag grammar.
//!
//! A tag has up to four `;`-separated segments:
//!
//! ```text
//! <long>[,<short>];<default>;<usage>;<options>
//! ```
//!
//! Segments beyond the fourth are ignored. A first segment of exactly `-`
//! marks the field as ignored. Options are matched case-insensitively as
//! substrings, so `hidden`, `hide-default` and `flatten` can be combined in
//! any order with any separator.

use std::convert::Infallible;
use std::str::FromStr;

/// Parsed representation of a flag tag.
///
/// # Examples
///
/// ```
/// use flagbind::FlagTag;
///
/// let tag = FlagTag::parse("num,n;5;Number of times;hide-default");
/// assert_eq!(tag.name, "num");
/// assert_eq!(tag.short, "n");
/// assert_eq!(tag.default, "5");
/// assert_eq!(tag.usage, "Number of times");
/// assert!(tag.hide_default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag option is an independent switch"
)]
pub struct FlagTag {
    /// Long flag name with leading dashes removed.
    pub name: String,
    /// Short flag name; empty or exactly one character.
    pub short: String,
    /// Default value literal, applied only when the field is zero.
    pub default: String,
    /// Help text with surrounding whitespace trimmed.
    pub usage: String,
    /// The tag was `-`; the field is skipped entirely.
    pub ignored: bool,
    /// A non-empty long name was supplied.
    pub explicit_name: bool,
    /// Suppress the default value in help output.
    pub hide_default: bool,
    /// Hide the flag from help output.
    pub hidden: bool,
    /// Do not add a prefix for this nested struct.
    pub flatten: bool,
}

impl FlagTag {
    /// Parses a raw tag string. An empty tag yields the default record.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if tag.is_empty() {
            return Self::default();
        }
        let mut segments = tag.split(';');
        let names = segments.next().unwrap_or_default();
        if names == "-" {
            return Self {
                ignored: true,
                ..Self::default()
            };
        }

        let (name, short) = parse_names(names);
        let mut parsed = Self {
            explicit_name: !name.is_empty(),
            name,
            short,
            ..Self::default()
        };
        if let Some(default) = segments.next() {
            default.clone_into(&mut parsed.default);
        }
        if let Some(usage) = segments.next() {
            usage.trim().clone_into(&mut parsed.usage);
        }
        if let Some(options) = segments.next() {
            parsed.apply_options(options);
        }
        parsed
    }

    /// Returns the short name as a single character, if present.
    #[must_use]
    pub fn shorthand(&self) -> Option<char> {
        let mut chars = self.short.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    /// Appends usage continuations, each joined by a single space.
    pub fn extend_usage<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in parts {
            if !self.usage.is_empty() {
                self.usage.push(' ');
            }
            self.usage.push_str(part.as_ref());
        }
    }

    fn apply_options(&mut self, options: &str) {
        let lowered = options.to_lowercase();
        self.hidden = lowered.contains("hidden");
        self.hide_default = lowered.contains("hide-default");
        self.flatten = lowered.contains("flatten");
    }
}

impl FromStr for FlagTag {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(tag))
    }
}

/// Splits `long[,short]`, strips leading dashes, and normalises the pair so
/// that `name` holds the longer entry and `short` is empty or one character.
fn parse_names(names: &str) -> (String, String) {
    let mut parts = names.split(',');
    let mut name = parts
        .next()
        .unwrap_or_default()
        .trim_start_matches('-')
        .to_owned();
    let mut short = parts
        .next()
        .map(|s| s.trim_start_matches('-').to_owned())
        .unwrap_or_default();

    if name.chars().count() < short.chars().count() {
        std::mem::swap(&mut name, &mut short);
    }
    if name.chars().count() == 1 {
        short.clone_from(&name);
    } else if short.chars().count() > 1 {
        short.clear();
    }
    (name, short)
}
