//! Procedural macros for `flagbind`.
//!
//! `#[derive(FlagBind)]` generates a field walk that hands every public
//! field to `flagbind::Walker::field` together with a compile-time
//! `FieldSpec`: the field identifier, the `CamelCase` name source, the raw
//! tag and any usage continuations. Struct-level overrides run after the
//! fields.
//!
//! Field attributes:
//!
//! * `#[flag = "<long>[,<short>];<default>;<usage>;<options>"]` sets the tag.
//! * `#[flag(tag = "...", use = "...", embed)]` is the list form. `use` may
//!   repeat and appends usage text; `embed` marks the field as embedded.
//!
//! Struct attributes:
//!
//! * `#[flag(override = "...", use = "...")]` adjusts an already-declared flag.
//! * `#[flag(crate = "path")]` names the `flagbind` crate when it is renamed.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagbind::FlagBind`.
///
/// Also implements `flagbind::Bindable`, so derived structs can be bind
/// targets and nested fields.
#[proc_macro_derive(FlagBind, attributes(flag))]
pub fn derive_flag_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::flag_bind(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `flagbind::Bindable` on types with a hand-written
/// `flagbind::FlagBind` implementation.
#[proc_macro_derive(Bindable, attributes(flag))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::bindable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
