//! A flag registry that parses command lines with `clap`.

use std::collections::HashMap;
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};

use super::{ExtFlag, ExtendedFlagSet, Flag, FlagSet, Registry};
use crate::error::{ParseError, RegistryError};
use crate::value::Value;

/// Identifier of the trailing positional argument collector.
const POSITIONAL: &str = "[args]";

/// Type label for values that declare none.
const UNTYPED: &str = "value";

struct Entry<'a> {
    meta: ExtFlag,
    value: Box<dyn Value + 'a>,
    changed: bool,
}

/// Flag registry that builds a [`clap::Command`] from its declarations.
///
/// Values borrow the bound fields for `'a`; [`ClapFlagSet::parse`] writes
/// command-line values straight into them.
///
/// ```
/// use flagbind::{ClapFlagSet, FlagBind};
///
/// #[derive(Default, FlagBind)]
/// struct Config {
///     #[flag = "port,p;8080;Listen port"]
///     pub port: u16,
///     pub verbose: bool,
/// }
///
/// let mut config = Config::default();
/// let mut flags = ClapFlagSet::new("demo");
/// flagbind::bind(&mut flags, &mut config).expect("bind config");
/// flags.parse(["-p", "9000", "--verbose", "extra"]).expect("parse args");
/// assert_eq!(flags.args(), ["extra"]);
/// drop(flags);
/// assert_eq!(config.port, 9000);
/// assert!(config.verbose);
/// ```
pub struct ClapFlagSet<'a> {
    name: String,
    extended: bool,
    entries: Vec<Entry<'a>>,
    by_name: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
    args: Vec<String>,
}

impl<'a> ClapFlagSet<'a> {
    /// Creates a registry offering the extended flag set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extended: true,
            entries: Vec::new(),
            by_name: HashMap::new(),
            by_short: HashMap::new(),
            args: Vec::new(),
        }
    }

    /// Creates a registry offering only the standard flag set: no short
    /// names, no hidden flags, and no list or IP kinds.
    #[must_use]
    pub fn long_only(name: impl Into<String>) -> Self {
        Self {
            extended: false,
            ..Self::new(name)
        }
    }

    /// Whether the extended flag set is offered.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.extended
    }

    /// Builds the `clap` command describing every declared flag.
    ///
    /// Positional arguments are collected under an internal identifier and
    /// exposed through [`ClapFlagSet::args`] after parsing.
    #[must_use]
    pub fn command(&self) -> Command {
        let flags = self.entries.iter().map(|entry| build_arg(entry));
        Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args(flags)
            .arg(
                Arg::new(POSITIONAL)
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .value_parser(clap::value_parser!(String))
                    .hide(true),
            )
    }

    /// Parses `args`, which must not include the binary name.
    ///
    /// Every occurrence of a flag is passed to its value in order, so list
    /// flags accumulate and scalar flags keep the last occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Cli`] when `clap` rejects the arguments and
    /// [`ParseError::Value`] when a value rejects its text.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command()
            .try_get_matches_from(args)
            .map_err(Box::new)?;

        for entry in &mut self.entries {
            let name = entry.meta.name.as_str();
            if matches.value_source(name) != Some(ValueSource::CommandLine) {
                continue;
            }
            let Some(raw) = matches.get_raw(name) else {
                continue;
            };
            for occurrence in raw {
                let text = occurrence.to_str().ok_or_else(|| ParseError::NonUtf8 {
                    name: name.to_owned(),
                })?;
                entry
                    .value
                    .set(text)
                    .map_err(|source| RegistryError::invalid_value(name, text, source))?;
                entry.changed = true;
                tracing::trace!(flag = name, value = text, "applied command-line value");
            }
        }

        self.args = matches
            .get_many::<String>(POSITIONAL)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        Ok(())
    }

    /// Positional arguments left after flags were parsed.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the metadata of a declared flag.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&ExtFlag> {
        self.entry(name).map(|entry| &entry.meta)
    }

    /// Iterates over declared flags in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &ExtFlag> {
        self.entries.iter().map(|entry| &entry.meta)
    }

    /// Renders the current value of a declared flag.
    #[must_use]
    pub fn value_text(&self, name: &str) -> Option<String> {
        self.entry(name).map(|entry| entry.value.to_string())
    }

    /// Whether the flag appeared on the parsed command line.
    #[must_use]
    pub fn changed(&self, name: &str) -> bool {
        self.entry(name).is_some_and(|entry| entry.changed)
    }

    /// Renders help text for all visible flags.
    #[must_use]
    pub fn usage(&self) -> String {
        self.command().render_help().to_string()
    }

    fn entry(&self, name: &str) -> Option<&Entry<'a>> {
        self.by_name
            .get(name)
            .and_then(|index| self.entries.get(*index))
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Entry<'a>> {
        let index = *self.by_name.get(name)?;
        self.entries.get_mut(index)
    }

    fn insert(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError> {
        if self.by_name.contains_key(name) {
            return Err(RegistryError::Redefined {
                name: name.to_owned(),
            });
        }
        if let Some(short) = shorthand
            && let Some(existing) = self.by_short.get(&short).and_then(|i| self.entries.get(*i))
        {
            return Err(RegistryError::ShorthandRedefined {
                short,
                name: name.to_owned(),
                existing: existing.meta.name.clone(),
            });
        }

        let meta = ExtFlag {
            flag: Flag {
                name: name.to_owned(),
                usage: usage.to_owned(),
                def_value: value.to_string(),
            },
            shorthand,
            hidden: false,
            type_name: value.type_name().unwrap_or(UNTYPED).to_owned(),
        };
        let index = self.entries.len();
        self.entries.push(Entry {
            meta,
            value,
            changed: false,
        });
        self.by_name.insert(name.to_owned(), index);
        if let Some(short) = shorthand {
            self.by_short.insert(short, index);
        }
        Ok(())
    }
}

fn build_arg(entry: &Entry<'_>) -> Arg {
    let meta = &entry.meta;
    let mut arg = Arg::new(meta.name.clone())
        .long(meta.name.clone())
        .help(meta.usage.clone())
        .action(ArgAction::Append)
        .hide(meta.hidden);
    if let Some(short) = meta.shorthand {
        arg = arg.short(short);
    }
    if entry.value.is_bool_flag() {
        arg = arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true");
    } else {
        arg = arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name(meta.type_name.clone());
    }
    if !meta.def_value.is_empty() {
        arg = arg.default_value(meta.def_value.clone());
    }
    arg
}

impl<'a> FlagSet<'a> for ClapFlagSet<'a> {
    fn var(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.insert(value, name, None, usage)
    }

    fn lookup(&mut self, name: &str) -> Option<&mut Flag> {
        self.entry_mut(name).map(|entry| &mut entry.meta.flag)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), RegistryError> {
        let entry = self
            .entry_mut(name)
            .ok_or_else(|| RegistryError::UndefinedFlag {
                name: name.to_owned(),
            })?;
        entry
            .value
            .set(value)
            .map_err(|source| RegistryError::invalid_value(name, value, source))
    }
}

impl<'a> ExtendedFlagSet<'a> for ClapFlagSet<'a> {
    fn var_p(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        short: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.insert(value, name, short, usage)
    }

    fn lookup_ext(&mut self, name: &str) -> Option<&mut ExtFlag> {
        self.entry_mut(name).map(|entry| &mut entry.meta)
    }
}

impl<'a> Registry<'a> for ClapFlagSet<'a> {
    fn as_extended(&mut self) -> Option<&mut dyn ExtendedFlagSet<'a>> {
        if self.extended { Some(self) } else { None }
    }

    fn as_standard(&mut self) -> Option<&mut dyn FlagSet<'a>> {
        Some(self)
    }
}
