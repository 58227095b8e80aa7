//! Declares command-line flags from annotated configuration structs.
//!
//! Derive [`FlagBind`] on a struct and call [`bind`] with a flag registry:
//! every public field becomes a flag named after the field, adjusted by its
//! `#[flag = "..."]` tag. Nested structs contribute prefixed flags. The
//! registry keeps mutable borrows of the fields, so parsing the command line
//! writes directly into the struct.
//!
//! ```
//! use flagbind::{ClapFlagSet, FlagBind};
//!
//! #[derive(Default, FlagBind)]
//! struct Database {
//!     pub host: String,
//!     #[flag = ";5432"]
//!     pub port: u16,
//! }
//!
//! #[derive(Default, FlagBind)]
//! struct Config {
//!     #[flag = "log-level,l;info;Logging threshold"]
//!     pub log_level: String,
//!     pub database: Database,
//! }
//!
//! let mut config = Config::default();
//! let mut flags = ClapFlagSet::new("app");
//! flagbind::bind(&mut flags, &mut config).expect("bind config");
//! flags
//!     .parse(["-l", "debug", "--database-host", "db.internal"])
//!     .expect("parse args");
//! drop(flags);
//!
//! assert_eq!(config.log_level, "debug");
//! assert_eq!(config.database.host, "db.internal");
//! assert_eq!(config.database.port, 5432);
//! ```
//!
//! The tag grammar is `<long>[,<short>];<default>;<usage>;<options>`; see
//! [`FlagTag`] for the details.

extern crate self as flagbind;

pub use flagbind_macros::{Bindable, FlagBind};

mod bind;
mod bindable;
mod case;
mod error;
mod options;
mod registry;
mod tag;
mod value;

pub use bind::{Binder, FieldSpec, FlagBind, Walker, bind};
pub use bindable::{Bindable, ListTarget, Target};
pub use case::from_camel_case;
pub use error::{BindError, ParseError, RegistryError, ValueError};
pub use options::{BindOptions, Override, separator, set_separator};
pub use registry::{ClapFlagSet, ExtFlag, ExtendedFlagSet, Flag, FlagSet, Registry};
pub use tag::FlagTag;
#[cfg(feature = "serde_json")]
pub use value::JsonRawMessage;
pub use value::{
    DurationError, List, Native, Parsed, Scalar, Typed, Value, ensure_typed, format_duration,
    parse_duration,
};
