//! Shared fixtures for the behavioural scenarios.

use flagbind::{BindOptions, ExtFlag, FlagBind};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Configuration bound by every scenario.
#[derive(Debug, Default, FlagBind)]
pub struct ServiceConfig {
    #[flag = "log-level,l;info;Log verbosity"]
    pub log_level: String,
    #[flag = ";8080;Listen port"]
    pub port: u16,
    pub database: DatabaseConfig,
    #[flag = ";;Dump internal state;hidden"]
    pub trace_state: bool,
    #[flag = ";changeme;;hide-default"]
    pub api_token: String,
    pub peers: Vec<String>,
}

/// Nested connection settings.
#[derive(Debug, Default, FlagBind)]
pub struct DatabaseConfig {
    #[flag = ";localhost;Database host"]
    pub host: String,
    #[flag = ";5432"]
    pub port: u16,
}

/// What a bind step produced.
#[derive(Debug)]
pub enum Outcome {
    /// Flags were declared; `config` reflects any parsed arguments.
    Bound {
        /// Declared flags in declaration order.
        flags: Vec<ExtFlag>,
        /// The configuration after parsing.
        config: ServiceConfig,
    },
    /// Binding or parsing failed with this message.
    Failed(String),
}

impl Outcome {
    /// Finds a declared flag by name.
    pub fn flag(&self, name: &str) -> Option<&ExtFlag> {
        match self {
            Self::Bound { flags, .. } => flags.iter().find(|flag| flag.name == name),
            Self::Failed(_) => None,
        }
    }
}

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct BindingContext {
    pub options: Slot<BindOptions>,
    pub outcome: Slot<Outcome>,
}

/// Creates a clean binding context for each scenario.
#[fixture]
pub fn binding_context() -> BindingContext {
    BindingContext::default()
}
