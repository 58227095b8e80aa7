//! Raw JSON flag values.

use std::fmt;

use super::Value;
use crate::error::ValueError;

/// Unparsed JSON text, validated when set.
///
/// ```
/// use flagbind::{JsonRawMessage, Value};
///
/// let mut raw = JsonRawMessage::default();
/// raw.set(r#"{"retries": 3}"#).expect("valid JSON");
/// assert!(raw.set("{not json").is_err());
/// assert_eq!(raw.as_str(), r#"{"retries": 3}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonRawMessage(String);

impl JsonRawMessage {
    /// Returns the stored JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonRawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Value for JsonRawMessage {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        serde_json::from_str::<serde_json::Value>(text)
            .map_err(|err| ValueError::parse(text, err))?;
        text.clone_into(&mut self.0);
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn type_name(&self) -> Option<&str> {
        Some("JSON")
    }
}
