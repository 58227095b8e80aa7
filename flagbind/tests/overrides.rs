//! Struct-level and runtime overrides, usage continuation, and hand-written
//! binders.

use anyhow::{Result, anyhow, ensure};
use flagbind::{
    BindError, BindOptions, Bindable, Binder, ClapFlagSet, FlagBind, Override, Walker,
};
use rstest::rstest;

#[derive(Debug, Default, FlagBind)]
struct Database {
    #[flag = ";localhost;Database host"]
    pub host: String,
    #[flag = ";5432;Database port"]
    pub port: u16,
}

#[derive(Debug, Default, FlagBind)]
#[flag(override = "database-port;6543;Replica port", use = "(read-only)")]
#[flag(override = "database-host;;;hidden")]
struct Replica {
    pub database: Database,
}

#[rstest]
fn struct_overrides_adjust_nested_flags() -> Result<()> {
    let mut replica = Replica::default();
    let mut flags = ClapFlagSet::new("replica");
    flagbind::bind(&mut flags, &mut replica)?;

    let port = flags
        .flag("database-port")
        .ok_or_else(|| anyhow!("missing database-port"))?;
    ensure!(port.def_value == "6543");
    ensure!(port.usage == "Replica port (read-only)");
    ensure!(!port.hidden);

    let host = flags
        .flag("database-host")
        .ok_or_else(|| anyhow!("missing database-host"))?;
    ensure!(host.hidden);
    ensure!(host.usage == "Database host");
    ensure!(host.def_value == "localhost");
    drop(flags);

    ensure!(replica.database.port == 6543);
    Ok(())
}

#[rstest]
fn runtime_overrides_run_after_the_walk() -> Result<()> {
    let mut database = Database::default();
    let mut flags = ClapFlagSet::new("runtime");
    let options = BindOptions::default()
        .with_separator("-")
        .with_override(Override::new("port;7000;;hide-default").with_usage("(pinned)"))
        .with_override(Override::new("-;ignored"));
    Binder::new(options).bind(&mut flags, &mut database)?;

    let port = flags.flag("port").ok_or_else(|| anyhow!("missing port"))?;
    ensure!(port.def_value.is_empty());
    ensure!(port.usage == "(pinned)");
    drop(flags);
    ensure!(database.port == 7000);
    Ok(())
}

#[rstest]
fn overrides_must_name_declared_flags() -> Result<()> {
    let mut database = Database::default();
    let mut flags = ClapFlagSet::new("missing");
    let options = BindOptions::default().with_override(Override::new("replica-port;1"));
    let err = Binder::new(options)
        .bind(&mut flags, &mut database)
        .err()
        .ok_or_else(|| anyhow!("bind unexpectedly succeeded"))?;
    ensure!(
        matches!(&err, BindError::OverrideUndefined { name } if name == "replica-port"),
        "{err}"
    );
    Ok(())
}

#[rstest]
fn rejected_override_defaults_name_the_flag() -> Result<()> {
    let mut database = Database::default();
    let mut flags = ClapFlagSet::new("invalid");
    let options = BindOptions::default().with_override(Override::new("port;many"));
    let err = Binder::new(options)
        .bind(&mut flags, &mut database)
        .err()
        .ok_or_else(|| anyhow!("bind unexpectedly succeeded"))?;
    ensure!(
        matches!(&err, BindError::DefaultValue { field, value, .. } if field == "port" && value == "many"),
        "{err}"
    );
    Ok(())
}

#[derive(Debug, Default, FlagBind)]
struct Described {
    #[flag(tag = ";;Log filter", use = "in tracing", use = "directive syntax")]
    pub log_filter: String,
    #[flag(use = "Continuation only")]
    pub note: String,
}

#[rstest]
fn usage_continuations_join_with_spaces() -> Result<()> {
    let mut described = Described::default();
    let mut flags = ClapFlagSet::new("usage");
    flagbind::bind(&mut flags, &mut described)?;
    ensure!(
        flags.flag("log-filter").map(|f| f.usage.as_str())
            == Some("Log filter in tracing directive syntax")
    );
    ensure!(flags.flag("note").map(|f| f.usage.as_str()) == Some("Continuation only"));
    Ok(())
}

/// Binds a URL under the current prefix with a short name when possible.
#[derive(Debug, Default, Bindable)]
struct Endpoint {
    url: String,
}

impl FlagBind for Endpoint {
    fn flag_bind<'a>(&'a mut self, walker: &mut Walker<'_, 'a>) -> Result<(), BindError> {
        let name = format!("{}url", walker.prefix());
        let default = self.url.clone();
        match walker.extended_flag_set() {
            Some(flags) => flags.string_var_p(&mut self.url, &name, Some('u'), default, "Endpoint URL")?,
            None => walker.flag_set().string_var(&mut self.url, &name, default, "Endpoint URL")?,
        }
        Ok(())
    }
}

#[derive(Debug, Default, FlagBind)]
struct Client {
    pub upstream: Endpoint,
    #[flag = ";3"]
    pub retries: u32,
}

#[rstest]
fn hand_written_binders_receive_the_prefix() -> Result<()> {
    let mut client = Client::default();
    let mut flags = ClapFlagSet::new("client");
    flagbind::bind(&mut flags, &mut client)?;
    ensure!(flags.flag("upstream-url").and_then(|f| f.shorthand) == Some('u'));
    flags.parse(["-u", "https://example.org"])?;
    drop(flags);
    ensure!(client.upstream.url == "https://example.org");
    ensure!(client.retries == 3);
    Ok(())
}

#[rstest]
fn hand_written_binders_fall_back_to_the_standard_set() -> Result<()> {
    let mut client = Client::default();
    let mut flags = ClapFlagSet::long_only("client");
    flagbind::bind(&mut flags, &mut client)?;
    ensure!(flags.flag("upstream-url").is_some_and(|f| f.shorthand.is_none()));
    Ok(())
}
