//! Configuration structs whose fields become the demo's flags.

use std::time::Duration;

use flagbind::FlagBind;

/// Top-level options of the greeter.
///
/// Binding produces `--recipient`/`-r`, `--salutation`, `--excited`/`-e`,
/// `--repeat`, `--delivery-delay`, `--delivery-shout` and `--help`/`-h`.
#[derive(Debug, Default, FlagBind)]
pub struct GreetConfig {
    /// Who to greet first.
    #[flag = "recipient,r;World;Who to greet"]
    pub recipient: String,
    /// Greeting word.
    #[flag = ";Hello;Greeting word"]
    pub salutation: String,
    /// End each greeting with an exclamation mark.
    #[flag = "excited,e;;Add an exclamation mark"]
    pub excited: bool,
    /// Number of times each recipient is greeted.
    #[flag = ";1;Number of times to greet"]
    pub repeat: u32,
    /// How greetings are delivered.
    pub delivery: Delivery,
    /// Print usage and exit.
    #[flag = "help,h;;Print this help"]
    pub help: bool,
}

/// Delivery settings, exposed under the `delivery-` prefix.
#[derive(Debug, Default, FlagBind)]
pub struct Delivery {
    /// Pause between greetings.
    #[flag = ";;Pause between greetings, e.g. 250ms"]
    pub delay: Duration,
    /// Upper-case every greeting.
    #[flag(tag = ";;Shout the greeting", use = "in capitals")]
    pub shout: bool,
}
