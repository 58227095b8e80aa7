//! Builds and writes the greetings described by a [`GreetConfig`].

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::config::GreetConfig;
use crate::error::{Result, ValidationError};

/// Validated greetings ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    lines: Vec<String>,
    delay: Duration,
}

impl GreetingPlan {
    /// Builds the plan for `config`, greeting `extra` recipients after the
    /// configured one.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a recipient or the salutation is
    /// blank, or when `repeat` is zero.
    pub fn new(config: &GreetConfig, extra: &[String]) -> Result<Self> {
        let salutation = config.salutation.trim();
        if salutation.is_empty() {
            return Err(ValidationError::BlankSalutation.into());
        }
        if config.repeat == 0 {
            return Err(ValidationError::ZeroRepeat.into());
        }
        let punctuation = if config.excited { "!" } else { "." };

        let mut lines = Vec::new();
        for recipient in std::iter::once(&config.recipient).chain(extra) {
            let name = recipient.trim();
            if name.is_empty() {
                return Err(ValidationError::BlankRecipient.into());
            }
            let line = format!("{salutation}, {name}{punctuation}");
            let rendered = if config.delivery.shout {
                line.to_uppercase()
            } else {
                line
            };
            lines.extend(std::iter::repeat_n(rendered, repeat_count(config.repeat)));
        }
        debug!(count = lines.len(), "planned greetings");
        Ok(Self {
            lines,
            delay: config.delivery.delay,
        })
    }

    /// The greetings in output order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Writes every greeting on its own line, pausing between them.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

fn repeat_count(repeat: u32) -> usize {
    usize::try_from(repeat).unwrap_or(usize::MAX)
}
