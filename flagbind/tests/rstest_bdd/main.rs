//! Behavioural tests for `flagbind` using `rstest-bdd`.
//!
//! [`fixtures`] holds the annotated configuration and the shared scenario
//! state, [`steps`] the step definitions, and [`scenarios`] binds the
//! feature files to them.

mod fixtures;
mod scenarios;
mod steps;
