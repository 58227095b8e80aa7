//! Duration text in the `1h30m`, `1.5s`, `250ms` style.
//!
//! A duration is a sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
//! The bare string `0` is also accepted. Negative durations cannot be
//! represented by [`Duration`] and are rejected.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Error returned by [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// The text does not follow the duration grammar.
    #[error("invalid duration {0:?}")]
    Syntax(String),
    /// The text names a unit outside `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.
    #[error("unknown unit {unit:?} in duration {text:?}")]
    UnknownUnit {
        /// Offending unit.
        unit: String,
        /// Whole input.
        text: String,
    },
    /// The duration is negative or exceeds the representable range.
    #[error("duration {0:?} is out of range")]
    OutOfRange(String),
}

/// Parses duration text such as `1h30m` or `1.5s`.
///
/// # Errors
///
/// Returns a [`DurationError`] when the text is malformed, uses an unknown
/// unit, is negative, or overflows 64-bit nanoseconds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flagbind::parse_duration;
///
/// assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
/// assert_eq!(parse_duration("1.5ms"), Ok(Duration::from_micros(1_500)));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<Duration, DurationError> {
    let syntax = || DurationError::Syntax(text.to_owned());
    let out_of_range = || DurationError::OutOfRange(text.to_owned());

    let mut rest = text.strip_prefix('+').unwrap_or(text);
    if rest.starts_with('-') {
        return Err(out_of_range());
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(syntax());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(syntax());
        }
        let unit_end = after_number
            .find(|ch: char| ch == '.' || ch.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, tail) = after_number.split_at(unit_end);
        if unit.is_empty() {
            return Err(syntax());
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            text: text.to_owned(),
        })?;

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let component = whole_value
            .checked_mul(scale)
            .and_then(|nanos| nanos.checked_add(fraction_nanos(fraction, scale)))
            .ok_or_else(out_of_range)?;
        total = total.checked_add(component).ok_or_else(out_of_range)?;
        rest = tail;
    }

    let nanos = u64::try_from(total)
        .ok()
        .filter(|nanos| i64::try_from(*nanos).is_ok())
        .ok_or_else(out_of_range)?;
    Ok(Duration::from_nanos(nanos))
}

/// Renders a duration as `72h3m0.5s`, `1.5ms` or `0s`.
///
/// Durations under one second use the largest sub-second unit that keeps the
/// whole part non-zero.
///
/// ```
/// use std::time::Duration;
/// use flagbind::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(3_600)), "1h0m0s");
/// assert_eq!(format_duration(Duration::from_millis(1_500)), "1.5s");
/// assert_eq!(format_duration(Duration::from_micros(2)), "2µs");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < NANOS_PER_SECOND {
        let (scale, unit) = if nanos < NANOS_PER_MICRO {
            (1, "ns")
        } else if nanos < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{unit}", fixed_point(nanos, scale));
    }

    let seconds = duration.as_secs();
    let hours = seconds.checked_div(SECONDS_PER_HOUR).unwrap_or_default();
    let minutes = seconds
        .checked_rem(SECONDS_PER_HOUR)
        .and_then(|rem| rem.checked_div(SECONDS_PER_MINUTE))
        .unwrap_or_default();
    let rem_seconds = seconds.checked_rem(SECONDS_PER_MINUTE).unwrap_or_default();
    let rem_nanos =
        u128::from(rem_seconds) * NANOS_PER_SECOND + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&fixed_point(rem_nanos, NANOS_PER_SECOND));
    out.push('s');
    out
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_SECOND * 60),
        "h" => Some(NANOS_PER_SECOND * 3_600),
        _ => None,
    }
}

/// Scales the digits after the decimal point by `scale`, truncating digits
/// finer than one nanosecond.
fn fraction_nanos(fraction: &str, scale: u128) -> u128 {
    let mut nanos = 0;
    let mut place = scale;
    for digit in fraction.chars().filter_map(|ch| ch.to_digit(10)) {
        place = place.checked_div(10).unwrap_or_default();
        if place == 0 {
            break;
        }
        nanos += u128::from(digit) * place;
    }
    nanos
}

fn fixed_point(value: u128, scale: u128) -> String {
    let whole = value.checked_div(scale).unwrap_or_default();
    let fraction = value.checked_rem(scale).unwrap_or_default();
    if fraction == 0 {
        return whole.to_string();
    }
    let width = usize::try_from(scale.ilog10()).unwrap_or_default();
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
