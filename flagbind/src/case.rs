//! Conversion from `CamelCase` identifiers to separated lower-case flag names.

/// Converts a `CamelCase` name to lower case, inserting `sep` at word
/// boundaries.
///
/// Runs of capitals are treated as acronyms: the run stays together unless a
/// lower-case letter follows, in which case the last capital starts the next
/// word.
///
/// # Examples
///
/// ```
/// use flagbind::from_camel_case;
///
/// assert_eq!(from_camel_case("CamelID", "-"), "camel-id");
/// assert_eq!(from_camel_case("APIUrlID", "_"), "api_url_id");
/// assert_eq!(from_camel_case("APIURL", "-"), "apiurl");
/// ```
#[must_use]
pub fn from_camel_case(name: &str, sep: &str) -> String {
    let mut out = String::with_capacity(name.len() + sep.len());
    let mut acronym: Vec<char> = Vec::new();
    for ch in name.chars() {
        if ch.is_uppercase() {
            acronym.extend(ch.to_lowercase());
            continue;
        }
        if let Some((last, head)) = acronym.split_last() {
            if !out.is_empty() {
                out.push_str(sep);
            }
            out.extend(head);
            if !head.is_empty() {
                out.push_str(sep);
            }
            out.push(*last);
            acronym.clear();
        }
        out.push(ch);
    }
    if !out.is_empty() && !acronym.is_empty() {
        out.push_str(sep);
    }
    out.extend(acronym);
    out
}

/// Appends `sep` to a non-empty prefix unless it already ends in one of the
/// recognised separators `-`, `.` or `_`.
pub(crate) fn append_separator(prefix: &mut String, sep: &str) {
    if prefix.is_empty() || prefix.ends_with(['-', '.', '_']) {
        return;
    }
    prefix.push_str(sep);
}
