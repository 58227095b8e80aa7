//! Dispatch of a classified field onto the flag set primitives.

use super::walker::Capability;
use crate::bindable::{ListTarget, Target};
use crate::error::BindError;
use crate::registry::{ExtendedFlagSet, FlagSet};
use crate::tag::FlagTag;

/// Declares `target` under `tag.name`.
///
/// Returns `Ok(false)` when the standard flag set has no primitive for the
/// kind and the field was skipped.
pub(super) fn define<'a>(
    flags: &mut Capability<'_, 'a>,
    target: Target<'a>,
    tag: &FlagTag,
) -> Result<bool, BindError> {
    let created = match flags {
        Capability::Extended(set) => {
            extended(&mut **set, target, tag)?;
            true
        }
        Capability::Standard(set) => standard(&mut **set, target, tag)?,
    };
    if !created {
        return Ok(false);
    }

    if tag.hide_default
        && let Some(flag) = flags.flags().lookup(&tag.name)
    {
        flag.def_value.clear();
    }
    if let Some(flag) = flags.extended().and_then(|set| set.lookup_ext(&tag.name)) {
        flag.hidden = tag.hidden;
    }
    Ok(true)
}

fn extended<'a>(
    set: &mut dyn ExtendedFlagSet<'a>,
    target: Target<'a>,
    tag: &FlagTag,
) -> Result<(), BindError> {
    let name = tag.name.as_str();
    let short = tag.shorthand();
    let usage = tag.usage.as_str();
    match target {
        Target::Bool(field) => {
            let default = *field;
            set.bool_var_p(field, name, short, default, usage)?;
        }
        Target::Int(field) => {
            let default = *field;
            set.int_var_p(field, name, short, default, usage)?;
        }
        Target::Uint(field) => {
            let default = *field;
            set.uint_var_p(field, name, short, default, usage)?;
        }
        Target::Int64(field) => {
            let default = *field;
            set.int64_var_p(field, name, short, default, usage)?;
        }
        Target::Uint64(field) => {
            let default = *field;
            set.uint64_var_p(field, name, short, default, usage)?;
        }
        Target::Float32(field) => {
            let default = *field;
            set.float32_var_p(field, name, short, default, usage)?;
        }
        Target::Float64(field) => {
            let default = *field;
            set.float64_var_p(field, name, short, default, usage)?;
        }
        Target::String(field) => {
            let default = field.clone();
            set.string_var_p(field, name, short, default, usage)?;
        }
        Target::Duration(field) => {
            let default = *field;
            set.duration_var_p(field, name, short, default, usage)?;
        }
        Target::Ip(field) => {
            let default = *field;
            set.ip_var_p(field, name, short, default, usage)?;
        }
        Target::List(list) => extended_list(set, list, name, short, usage)?,
        Target::Value { value, type_name } => set.var_typed(value, type_name, name, short, usage)?,
        Target::Struct(_) | Target::Unsupported => {}
    }
    Ok(())
}

fn extended_list<'a>(
    set: &mut dyn ExtendedFlagSet<'a>,
    list: ListTarget<'a>,
    name: &str,
    short: Option<char>,
    usage: &str,
) -> Result<(), BindError> {
    match list {
        ListTarget::Bool(field) => {
            let default = field.clone();
            set.bool_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Int(field) => {
            let default = field.clone();
            set.int_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Int64(field) => {
            let default = field.clone();
            set.int64_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Uint(field) => {
            let default = field.clone();
            set.uint_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Float32(field) => {
            let default = field.clone();
            set.float32_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Float64(field) => {
            let default = field.clone();
            set.float64_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::String(field) => {
            let default = field.clone();
            set.string_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Duration(field) => {
            let default = field.clone();
            set.duration_slice_var_p(field, name, short, default, usage)?;
        }
        ListTarget::Ip(field) => {
            let default = field.clone();
            set.ip_slice_var_p(field, name, short, default, usage)?;
        }
    }
    Ok(())
}

fn standard<'a>(
    set: &mut dyn FlagSet<'a>,
    target: Target<'a>,
    tag: &FlagTag,
) -> Result<bool, BindError> {
    let name = tag.name.as_str();
    let usage = tag.usage.as_str();
    match target {
        Target::Bool(field) => {
            let default = *field;
            set.bool_var(field, name, default, usage)?;
        }
        Target::Int(field) => {
            let default = *field;
            set.int_var(field, name, default, usage)?;
        }
        Target::Uint(field) => {
            let default = *field;
            set.uint_var(field, name, default, usage)?;
        }
        Target::Int64(field) => {
            let default = *field;
            set.int64_var(field, name, default, usage)?;
        }
        Target::Uint64(field) => {
            let default = *field;
            set.uint64_var(field, name, default, usage)?;
        }
        Target::Float64(field) => {
            let default = *field;
            set.float64_var(field, name, default, usage)?;
        }
        Target::String(field) => {
            let default = field.clone();
            set.string_var(field, name, default, usage)?;
        }
        Target::Duration(field) => {
            let default = *field;
            set.duration_var(field, name, default, usage)?;
        }
        Target::Value { value, .. } => set.var(value, name, usage)?,
        Target::Float32(_)
        | Target::Ip(_)
        | Target::List(_)
        | Target::Struct(_)
        | Target::Unsupported => return Ok(false),
    }
    Ok(true)
}
