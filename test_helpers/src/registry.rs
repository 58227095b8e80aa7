//! A flag registry that records declarations without parsing anything.
//!
//! [`RecordingRegistry`] offers a selectable [`Level`] so tests can exercise
//! the binder against an extended registry, a standard-only registry, or a
//! registry exposing neither capability.

use std::collections::HashMap;

use flagbind::{ExtFlag, ExtendedFlagSet, Flag, FlagSet, Registry, RegistryError, Value};

/// Capability offered by a [`RecordingRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Short names, hidden flags, type labels and the wide kinds.
    Extended,
    /// Long names and the standard kinds only.
    Standard,
    /// No flag set at all.
    Unsupported,
}

struct Recorded<'a> {
    meta: ExtFlag,
    value: Box<dyn Value + 'a>,
}

/// Registry recording every declared flag in order.
pub struct RecordingRegistry<'a> {
    level: Level,
    recorded: Vec<Recorded<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> RecordingRegistry<'a> {
    /// Creates an empty registry offering `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            recorded: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declared flag names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.recorded
            .iter()
            .map(|entry| entry.meta.name.as_str())
            .collect()
    }

    /// Metadata recorded for `name`.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&ExtFlag> {
        self.index
            .get(name)
            .and_then(|i| self.recorded.get(*i))
            .map(|entry| &entry.meta)
    }

    /// Current rendering of the value bound to `name`.
    #[must_use]
    pub fn value_text(&self, name: &str) -> Option<String> {
        self.index
            .get(name)
            .and_then(|i| self.recorded.get(*i))
            .map(|entry| entry.value.to_string())
    }

    fn record(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(name) {
            return Err(RegistryError::Redefined {
                name: name.to_owned(),
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
            type_name: value.type_name().unwrap_or_default().to_owned(),
        };
        self.index.insert(name.to_owned(), self.recorded.len());
        self.recorded.push(Recorded { meta, value });
        Ok(())
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Recorded<'a>> {
        let i = *self.index.get(name)?;
        self.recorded.get_mut(i)
    }
}

impl<'a> FlagSet<'a> for RecordingRegistry<'a> {
    fn var(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.record(value, name, None, usage)
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

impl<'a> ExtendedFlagSet<'a> for RecordingRegistry<'a> {
    fn var_p(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        short: Option<char>,
        usage: &str,
    ) -> Result<(), RegistryError> {
        self.record(value, name, short, usage)
    }

    fn lookup_ext(&mut self, name: &str) -> Option<&mut ExtFlag> {
        self.entry_mut(name).map(|entry| &mut entry.meta)
    }
}

impl<'a> Registry<'a> for RecordingRegistry<'a> {
    fn as_extended(&mut self) -> Option<&mut dyn ExtendedFlagSet<'a>> {
        match self.level {
            Level::Extended => Some(self),
            Level::Standard | Level::Unsupported => None,
        }
    }

    fn as_standard(&mut self) -> Option<&mut dyn FlagSet<'a>> {
        match self.level {
            Level::Extended | Level::Standard => Some(self),
            Level::Unsupported => None,
        }
    }
}
