//! Binds the `flagbind` feature files to the step registry.

use crate::fixtures::{BindingContext, binding_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/binding.feature",
    fixtures = [binding_context: BindingContext]
);
