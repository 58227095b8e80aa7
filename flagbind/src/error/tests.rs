//! Tests for error rendering and conversions.

use rstest::rstest;

use super::{BindError, ParseError, RegistryError, ValueError};

fn rejected_default() -> BindError {
    BindError::default_value(
        "Port",
        "eighty",
        RegistryError::invalid_value("port", "eighty", ValueError::invalid("not a number")),
    )
}

#[test]
fn nested_errors_prefix_the_field() {
    let err = BindError::nested("Outer", BindError::nested("Inner", rejected_default()));
    assert_eq!(
        err.to_string(),
        "Outer: Inner: Port: cannot assign default value from tag: \"eighty\""
    );
    assert_eq!(err.field_path().as_deref(), Some("Outer.Inner.Port"));
    assert!(matches!(err.root_cause(), BindError::DefaultValue { field, .. } if field == "Port"));
}

#[test]
fn flat_errors_have_no_field_path() {
    let err = BindError::OverrideUndefined {
        name: "missing".to_owned(),
    };
    assert_eq!(err.field_path(), None);
    assert!(matches!(err.root_cause(), BindError::OverrideUndefined { .. }));
    assert_eq!(err.to_string(), "cannot override undefined flag: missing");
}

#[rstest]
#[case(
    RegistryError::Redefined { name: "port".to_owned() },
    "flag redefined: port"
)]
#[case(
    RegistryError::ShorthandRedefined {
        short: 'p',
        name: "path".to_owned(),
        existing: "port".to_owned(),
    },
    "unable to redefine 'p' shorthand in \"path\": it's already used for \"port\" flag"
)]
#[case(
    RegistryError::UndefinedFlag { name: "nope".to_owned() },
    "no such flag -nope"
)]
fn registry_errors_convert_to_bind_errors(#[case] source: RegistryError, #[case] expected: &str) {
    let err = BindError::from(source);
    assert_eq!(err.to_string(), expected);
}

#[test]
fn duplicate_names_map_to_dedicated_variants() {
    let dup = BindError::from(RegistryError::Redefined {
        name: "port".to_owned(),
    });
    assert!(matches!(dup, BindError::DuplicateFlag { name } if name == "port"));

    let other = BindError::from(RegistryError::UndefinedFlag {
        name: "port".to_owned(),
    });
    assert!(matches!(other, BindError::Registry(_)));
}

#[test]
fn value_errors_keep_the_parser_source() {
    let source = "x".parse::<u8>().expect_err("x is not a number");
    let err = ValueError::parse("x", source);
    assert!(err.to_string().starts_with("parse error for \"x\": "));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn parse_errors_wrap_registry_errors() {
    let err = ParseError::from(RegistryError::invalid_value(
        "ratio",
        "half",
        ValueError::invalid("bad float"),
    ));
    assert_eq!(
        err.to_string(),
        "invalid value \"half\" for flag -ratio: bad float"
    );
}
