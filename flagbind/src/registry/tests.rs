//! Unit tests for the flag-set traits and the clap-backed registry.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use rstest::rstest;

use super::{ClapFlagSet, ExtendedFlagSet, FlagSet, Registry};
use crate::error::{ParseError, RegistryError};

#[test]
fn primitives_assign_defaults_and_record_them() -> anyhow::Result<()> {
    let mut count = 0_isize;
    let mut wait = Duration::ZERO;
    let mut flags = ClapFlagSet::new("primitives");
    flags.int_var(&mut count, "count", 3, "How many")?;
    flags.duration_var(&mut wait, "wait", Duration::from_secs(2), "How long")?;

    assert_eq!(flags.flag("count").map(|f| f.def_value.as_str()), Some("3"));
    assert_eq!(flags.flag("wait").map(|f| f.def_value.as_str()), Some("2s"));
    assert_eq!(
        flags.flag("wait").map(|f| f.type_name.as_str()),
        Some("duration")
    );

    flags.set("count", "9")?;
    assert_eq!(flags.value_text("count").as_deref(), Some("9"));
    assert!(!flags.changed("count"));
    drop(flags);

    assert_eq!(count, 9);
    assert_eq!(wait, Duration::from_secs(2));
    Ok(())
}

#[test]
fn redefinition_is_an_error() -> anyhow::Result<()> {
    let mut first = String::new();
    let mut second = String::new();
    let mut flags = ClapFlagSet::new("dupes");
    flags.string_var(&mut first, "name", String::new(), "")?;
    let err = flags.string_var(&mut second, "name", String::new(), "");
    assert!(matches!(err, Err(RegistryError::Redefined { name }) if name == "name"));
    Ok(())
}

#[test]
fn shorthand_redefinition_names_both_flags() -> anyhow::Result<()> {
    let mut verbose = false;
    let mut version = false;
    let mut flags = ClapFlagSet::new("shorts");
    flags.bool_var_p(&mut verbose, "verbose", Some('v'), false, "")?;
    let err = flags.bool_var_p(&mut version, "version", Some('v'), false, "");
    assert!(matches!(
        err,
        Err(RegistryError::ShorthandRedefined { short: 'v', name, existing })
            if name == "version" && existing == "verbose"
    ));
    Ok(())
}

#[test]
fn set_reports_unknown_and_invalid_values() -> anyhow::Result<()> {
    let mut port = 0_u64;
    let mut flags = ClapFlagSet::new("set");
    flags.uint64_var(&mut port, "port", 0, "")?;
    assert!(matches!(
        flags.set("missing", "1"),
        Err(RegistryError::UndefinedFlag { name }) if name == "missing"
    ));
    assert!(matches!(
        flags.set("port", "eighty"),
        Err(RegistryError::InvalidValue { name, value, .. }) if name == "port" && value == "eighty"
    ));
    Ok(())
}

#[rstest]
#[case(&["--verbose"], true)]
#[case(&["--verbose=false"], false)]
#[case(&["-v"], true)]
#[case(&["--verbose=1", "--verbose=0"], false)]
#[case(&[], false)]
fn bool_flags_take_optional_values(#[case] args: &[&str], #[case] expected: bool) -> anyhow::Result<()> {
    let mut verbose = false;
    let mut flags = ClapFlagSet::new("bools");
    flags.bool_var_p(&mut verbose, "verbose", Some('v'), false, "Chatty output")?;
    flags.parse(args.iter().copied())?;
    assert_eq!(flags.changed("verbose"), !args.is_empty());
    drop(flags);
    assert_eq!(verbose, expected);
    Ok(())
}

#[test]
fn repeated_list_flags_accumulate() -> anyhow::Result<()> {
    let mut hosts = vec!["default".to_owned()];
    let mut peers: Vec<IpAddr> = Vec::new();
    let mut flags = ClapFlagSet::new("lists");
    let initial = hosts.clone();
    flags.string_slice_var_p(&mut hosts, "host", Some('H'), initial, "Hosts")?;
    flags.ip_slice_var_p(&mut peers, "peer", None, Vec::new(), "Peers")?;
    assert_eq!(
        flags.flag("host").map(|f| f.def_value.as_str()),
        Some("[default]")
    );

    flags.parse(["--host", "a,b", "-H", "c", "--peer=10.0.0.1", "trailing"])?;
    assert_eq!(flags.args(), ["trailing"]);
    drop(flags);

    assert_eq!(hosts, ["a", "b", "c"]);
    assert_eq!(peers, [IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))]);
    Ok(())
}

#[test]
fn values_may_start_with_a_dash() -> anyhow::Result<()> {
    let mut offset = 0_i64;
    let mut flags = ClapFlagSet::new("negatives");
    flags.int64_var(&mut offset, "offset", 0, "")?;
    flags.parse(["--offset", "-5"])?;
    drop(flags);
    assert_eq!(offset, -5);
    Ok(())
}

#[test]
fn unknown_flags_are_rejected_by_clap() {
    let mut flags = ClapFlagSet::new("unknown");
    let err = flags.parse(["--nope"]);
    assert!(matches!(err, Err(ParseError::Cli(_))));
}

#[test]
fn invalid_values_surface_the_flag_name() -> anyhow::Result<()> {
    let mut ratio = 0.0_f32;
    let mut flags = ClapFlagSet::new("invalid");
    flags.float32_var_p(&mut ratio, "ratio", None, 0.0, "")?;
    let err = flags.parse(["--ratio", "half"]);
    assert!(matches!(
        err,
        Err(ParseError::Value(RegistryError::InvalidValue { name, .. })) if name == "ratio"
    ));
    Ok(())
}

#[test]
fn usage_lists_visible_flags_only() -> anyhow::Result<()> {
    let mut shown = String::new();
    let mut secret = String::new();
    let mut flags = ClapFlagSet::new("usage");
    flags.string_var_p(&mut shown, "shown", Some('s'), "x".to_owned(), "Visible flag")?;
    flags.string_var_p(&mut secret, "secret", None, String::new(), "Hidden flag")?;
    if let Some(flag) = flags.lookup_ext("secret") {
        flag.hidden = true;
    }

    let usage = flags.usage();
    assert!(usage.contains("--shown"), "usage was: {usage}");
    assert!(usage.contains("Visible flag"), "usage was: {usage}");
    assert!(usage.contains("[default: x]"), "usage was: {usage}");
    assert!(!usage.contains("--secret"), "usage was: {usage}");
    Ok(())
}

#[test]
fn long_only_sets_hide_the_extended_capability() {
    let mut standard = ClapFlagSet::long_only("narrow");
    assert!(!standard.is_extended());
    assert!(standard.as_extended().is_none());
    assert!(standard.as_standard().is_some());

    let mut extended = ClapFlagSet::new("wide");
    assert!(extended.as_extended().is_some());
}

#[test]
fn lookup_exposes_mutable_metadata() -> anyhow::Result<()> {
    let mut level = 0_usize;
    let mut flags = ClapFlagSet::long_only("lookup");
    flags.uint_var(&mut level, "level", 1, "Level")?;
    if let Some(flag) = flags.lookup("level") {
        flag.usage = "Replaced".to_owned();
        flag.def_value.clear();
    }
    let meta = flags.flag("level");
    assert_eq!(meta.map(|f| f.usage.as_str()), Some("Replaced"));
    assert_eq!(meta.map(|f| f.def_value.as_str()), Some(""));
    assert_eq!(meta.and_then(|f| f.shorthand), None);
    Ok(())
}
