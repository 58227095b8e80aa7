//! Text conversions for the primitive flag kinds.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use super::duration::{format_duration, parse_duration};
use crate::error::ValueError;

/// A primitive type with a canonical text form.
///
/// Implemented for the boolean, integer, float, string, duration and IP
/// kinds. [`super::Scalar`] and [`super::List`] build flag values on top of
/// it.
pub trait Native: Sized {
    /// Type label for a single value, such as `int64`.
    const TYPE_NAME: &'static str;
    /// Type label for a list of values, such as `int64Slice`.
    const LIST_TYPE_NAME: &'static str;
    /// Whether the flag may be given without an argument.
    const IS_BOOL: bool = false;

    /// Parses the canonical text form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `text` does not describe a value of this
    /// type.
    fn parse_text(text: &str) -> Result<Self, ValueError>;

    /// Renders the canonical text form.
    fn render_text(&self) -> String;

    /// Whether this is the zero value of the type.
    fn is_zero(&self) -> bool;
}

/// Parses the boolean spellings accepted on the command line.
pub(super) fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::invalid(format!("invalid boolean {text:?}"))),
    }
}

/// Splits an optional sign and radix prefix from integer text.
///
/// `0x`, `0o` and `0b` select hexadecimal, octal and binary; a bare leading
/// zero selects octal.
fn split_radix(text: &str) -> (bool, u32, &str) {
    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| body.strip_prefix(prefix).map(|digits| (radix, digits)));
    let (radix, digits) = match prefixed {
        Some(found) => found,
        None if body.len() > 1 => body
            .strip_prefix('0')
            .map_or((10, body), |digits| (8, digits)),
        None => (10, body),
    };
    (negative, radix, digits)
}

fn parse_integer<T>(text: &str) -> Result<T, ValueError>
where
    T: TryFrom<i128>,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    let (negative, radix, digits) = split_radix(text);
    let cleaned: String = digits.chars().filter(|ch| *ch != '_').collect();
    if cleaned.starts_with(['+', '-']) {
        return Err(ValueError::invalid(format!("invalid integer {text:?}")));
    }
    let unsigned = u128::from_str_radix(&cleaned, radix)
        .map_err(|err| ValueError::parse(text, err))?;
    let magnitude = i128::try_from(unsigned).map_err(|err| ValueError::parse(text, err))?;
    let signed = if negative { -magnitude } else { magnitude };
    T::try_from(signed).map_err(|err| ValueError::parse(text, err))
}

macro_rules! native_integer {
    ($($ty:ty => $name:literal, $list:literal;)*) => {
        $(
            impl Native for $ty {
                const TYPE_NAME: &'static str = $name;
                const LIST_TYPE_NAME: &'static str = $list;

                fn parse_text(text: &str) -> Result<Self, ValueError> {
                    parse_integer(text)
                }

                fn render_text(&self) -> String {
                    self.to_string()
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

native_integer! {
    isize => "int", "intSlice";
    i8 => "int8", "int8Slice";
    i16 => "int16", "int16Slice";
    i32 => "int32", "int32Slice";
    i64 => "int64", "int64Slice";
    usize => "uint", "uintSlice";
    u8 => "uint8", "uint8Slice";
    u16 => "uint16", "uint16Slice";
    u32 => "uint32", "uint32Slice";
    u64 => "uint64", "uint64Slice";
}

macro_rules! native_float {
    ($($ty:ty => $name:literal, $list:literal;)*) => {
        $(
            impl Native for $ty {
                const TYPE_NAME: &'static str = $name;
                const LIST_TYPE_NAME: &'static str = $list;

                fn parse_text(text: &str) -> Result<Self, ValueError> {
                    text.parse().map_err(|err| ValueError::parse(text, err))
                }

                fn render_text(&self) -> String {
                    self.to_string()
                }

                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )*
    };
}

native_float! {
    f32 => "float32", "float32Slice";
    f64 => "float64", "float64Slice";
}

macro_rules! native_ip {
    ($($ty:ty => $unspecified:expr;)*) => {
        $(
            impl Native for $ty {
                const TYPE_NAME: &'static str = "ip";
                const LIST_TYPE_NAME: &'static str = "ipSlice";

                fn parse_text(text: &str) -> Result<Self, ValueError> {
                    text.trim().parse().map_err(|err| ValueError::parse(text, err))
                }

                fn render_text(&self) -> String {
                    self.to_string()
                }

                fn is_zero(&self) -> bool {
                    *self == $unspecified
                }
            }
        )*
    };
}

native_ip! {
    IpAddr => IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    Ipv4Addr => Ipv4Addr::UNSPECIFIED;
    Ipv6Addr => Ipv6Addr::UNSPECIFIED;
}

impl Native for bool {
    const TYPE_NAME: &'static str = "bool";
    const LIST_TYPE_NAME: &'static str = "boolSlice";
    const IS_BOOL: bool = true;

    fn parse_text(text: &str) -> Result<Self, ValueError> {
        parse_bool(text)
    }

    fn render_text(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Native for String {
    const TYPE_NAME: &'static str = "string";
    const LIST_TYPE_NAME: &'static str = "stringSlice";

    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.to_owned())
    }

    fn render_text(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Native for Duration {
    const TYPE_NAME: &'static str = "duration";
    const LIST_TYPE_NAME: &'static str = "durationSlice";

    fn parse_text(text: &str) -> Result<Self, ValueError> {
        parse_duration(text).map_err(|err| ValueError::parse(text, err))
    }

    fn render_text(&self) -> String {
        format_duration(*self)
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
