//! Step definitions for the binding scenarios.

use crate::fixtures::{BindingContext, Outcome, ServiceConfig};
use anyhow::{Result, anyhow, ensure};
use flagbind::{BindOptions, Binder, ClapFlagSet, ExtFlag, Override};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{normalize_scalar, tokenise_args};

fn update_options(
    binding_context: &BindingContext,
    update: impl FnOnce(BindOptions) -> BindOptions,
) {
    let options = binding_context
        .options
        .take()
        .unwrap_or_else(|| BindOptions::default().with_separator("-"));
    binding_context.options.set(update(options));
}

fn bind_and_parse(options: &BindOptions, args: &[String]) -> Outcome {
    let mut config = ServiceConfig::default();
    let mut flags = ClapFlagSet::new("service");
    let result = Binder::new(options.clone())
        .bind(&mut flags, &mut config)
        .map_err(|err| err.to_string())
        .and_then(|()| flags.parse(args).map_err(|err| err.to_string()));
    let declared: Vec<ExtFlag> = flags.flags().cloned().collect();
    drop(flags);
    match result {
        Ok(()) => Outcome::Bound {
            flags: declared,
            config,
        },
        Err(message) => Outcome::Failed(message),
    }
}

fn run(binding_context: &BindingContext, args: &[String]) {
    let options = binding_context
        .options
        .get()
        .unwrap_or_else(|| BindOptions::default().with_separator("-"));
    binding_context
        .outcome
        .set(bind_and_parse(&options, args));
}

fn with_flag<R>(
    binding_context: &BindingContext,
    name: &str,
    check: impl FnOnce(&ExtFlag) -> R,
) -> Result<R> {
    binding_context
        .outcome
        .with_ref(|outcome| outcome.flag(name).map(check))
        .ok_or_else(|| anyhow!("no bind has run"))?
        .ok_or_else(|| anyhow!("flag {name} was not declared"))
}

fn with_config<R>(
    binding_context: &BindingContext,
    check: impl FnOnce(&ServiceConfig) -> R,
) -> Result<R> {
    binding_context
        .outcome
        .with_ref(|outcome| match outcome {
            Outcome::Bound { config, .. } => Ok(check(config)),
            Outcome::Failed(message) => Err(anyhow!("bind failed: {message}")),
        })
        .ok_or_else(|| anyhow!("no bind has run"))?
}

#[given("the default bind options")]
fn default_options(binding_context: &BindingContext) {
    binding_context
        .options
        .set(BindOptions::default().with_separator("-"));
}

#[given("the name prefix {prefix}")]
fn name_prefix(binding_context: &BindingContext, prefix: String) {
    let value = normalize_scalar(&prefix);
    update_options(binding_context, |options| options.with_prefix(value));
}

#[given("the override {tag}")]
fn add_override(binding_context: &BindingContext, tag: String) {
    let value = normalize_scalar(&tag);
    update_options(binding_context, |options| {
        options.with_override(Override::new(value))
    });
}

#[when("the service config is bound")]
fn bind_service(binding_context: &BindingContext) {
    run(binding_context, &[]);
}

#[when("the service config is bound with arguments {args}")]
fn bind_service_with(binding_context: &BindingContext, args: String) -> Result<()> {
    let raw = normalize_scalar(&args);
    let words =
        tokenise_args(&raw).ok_or_else(|| anyhow!("failed to tokenise arguments; raw={raw:?}"))?;
    run(binding_context, &words);
    Ok(())
}

#[then("flag {name} is declared")]
fn flag_declared(binding_context: &BindingContext, name: String) -> Result<()> {
    with_flag(binding_context, &name, |_| ())
}

#[then("flag {name} is not declared")]
fn flag_not_declared(binding_context: &BindingContext, name: String) -> Result<()> {
    ensure!(
        with_flag(binding_context, &name, |_| ()).is_err(),
        "flag {name} was declared"
    );
    Ok(())
}

#[then("flag {name} shows default {value}")]
fn flag_default(binding_context: &BindingContext, name: String, value: String) -> Result<()> {
    let expected = normalize_scalar(&value);
    let shown = with_flag(binding_context, &name, |flag| flag.def_value.clone())?;
    ensure!(shown == expected, "flag {name} shows {shown:?}");
    Ok(())
}

#[then("flag {name} shows no default")]
fn flag_no_default(binding_context: &BindingContext, name: String) -> Result<()> {
    let shown = with_flag(binding_context, &name, |flag| flag.def_value.clone())?;
    ensure!(shown.is_empty(), "flag {name} shows {shown:?}");
    Ok(())
}

#[then("flag {name} is hidden")]
fn flag_hidden(binding_context: &BindingContext, name: String) -> Result<()> {
    ensure!(
        with_flag(binding_context, &name, |flag| flag.hidden)?,
        "flag {name} is visible"
    );
    Ok(())
}

#[then("flag {name} has shorthand {short}")]
fn flag_shorthand(binding_context: &BindingContext, name: String, short: String) -> Result<()> {
    let expected = normalize_scalar(&short).chars().next();
    let actual = with_flag(binding_context, &name, |flag| flag.shorthand)?;
    ensure!(actual == expected, "flag {name} has shorthand {actual:?}");
    Ok(())
}

#[then("flag {name} has usage {usage}")]
fn flag_usage(binding_context: &BindingContext, name: String, usage: String) -> Result<()> {
    let expected = normalize_scalar(&usage);
    let actual = with_flag(binding_context, &name, |flag| flag.usage.clone())?;
    ensure!(actual == expected, "flag {name} has usage {actual:?}");
    Ok(())
}

#[then("the log level is {value}")]
fn log_level(binding_context: &BindingContext, value: String) -> Result<()> {
    let expected = normalize_scalar(&value);
    let actual = with_config(binding_context, |config| config.log_level.clone())?;
    ensure!(actual == expected, "log level was {actual:?}");
    Ok(())
}

#[then("the database port is {port:u16}")]
fn database_port(binding_context: &BindingContext, port: u16) -> Result<()> {
    let actual = with_config(binding_context, |config| config.database.port)?;
    ensure!(actual == port, "database port was {actual}");
    Ok(())
}

#[then("the peers are {peers}")]
fn peers(binding_context: &BindingContext, peers: String) -> Result<()> {
    let expected: Vec<String> = normalize_scalar(&peers)
        .split(',')
        .map(str::to_owned)
        .collect();
    let actual = with_config(binding_context, |config| config.peers.clone())?;
    ensure!(actual == expected, "peers were {actual:?}");
    Ok(())
}

fn failure_message(binding_context: &BindingContext) -> Result<String> {
    binding_context
        .outcome
        .with_ref(|outcome| match outcome {
            Outcome::Failed(actual) => Some(actual.clone()),
            Outcome::Bound { .. } => None,
        })
        .ok_or_else(|| anyhow!("no bind has run"))?
        .ok_or_else(|| anyhow!("bind unexpectedly succeeded"))
}

#[then("binding fails with {message}")]
fn binding_fails(binding_context: &BindingContext, message: String) -> Result<()> {
    let expected = normalize_scalar(&message);
    let actual = failure_message(binding_context)?;
    ensure!(actual == expected, "bind failed with {actual:?}");
    Ok(())
}

#[then("binding fails mentioning {text}")]
fn binding_fails_mentioning(binding_context: &BindingContext, text: String) -> Result<()> {
    let actual = failure_message(binding_context)?;
    ensure!(actual.contains(text.trim()), "bind failed with {actual:?}");
    Ok(())
}
