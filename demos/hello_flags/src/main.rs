//! `hello_flags` entry point: declare flags from the config struct, parse
//! the command line, then print the greetings.

use std::io::{self, Write};

use flagbind::ClapFlagSet;

use hello_flags::config::GreetConfig;
use hello_flags::error::Result;
use hello_flags::greeting::GreetingPlan;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let mut config = GreetConfig::default();
    let mut flags = ClapFlagSet::new("hello-flags");
    flagbind::bind(&mut flags, &mut config)?;
    flags.parse(std::env::args_os().skip(1))?;
    let usage = flags.usage();
    let extra = flags.args().to_vec();
    drop(flags);

    let mut stdout = io::stdout().lock();
    if config.help {
        stdout.write_all(usage.as_bytes())?;
        return Ok(());
    }
    let plan = GreetingPlan::new(&config, &extra)?;
    plan.write_to(&mut stdout)?;
    Ok(())
}
