//! `page.key=value` state assignments given on the command line.

use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("expected page.key=value, got \"{0}\"")]
    Malformed(String),
}

/// A field to set when the walk reaches `page`.
///
/// The value is parsed as JSON when possible (`true`, `3`, `"x"`, `{..}`), otherwise kept
/// as a plain string.
#[derive(Debug, Clone, PartialEq)]
pub struct StateAssignment {
    pub page: String,
    pub key: String,
    pub value: Value,
}

impl FromStr for StateAssignment {
    type Err = AssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AssignmentError::Malformed(s.to_string());
        let (target, raw) = s.split_once('=').ok_or_else(malformed)?;
        let (page, key) = target.split_once('.').ok_or_else(malformed)?;
        if page.is_empty() || key.is_empty() {
            return Err(malformed());
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok(Self {
            page: page.to_string(),
            key: key.to_string(),
            value,
        })
    }
}
