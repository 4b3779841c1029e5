//! What to do when a step would overwrite existing, non-empty output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;

/// Process-wide rule applied to every "already exists and is not empty"
/// situation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarningPolicy {
    /// Ask the operator before overwriting.
    #[default]
    Prompt,
    /// Overwrite without asking.
    Continue,
    /// Leave the existing output alone and skip the step.
    Stop,
}

impl WarningPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Continue => "continue",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for WarningPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarningPolicy {
    type Err = DomainError;

    /// Case-insensitive: `Stop`, `stop` and `STOP` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "continue" => Ok(Self::Continue),
            "stop" => Ok(Self::Stop),
            _ => Err(DomainError::UnknownWarningPolicy(s.to_string())),
        }
    }
}

impl Serialize for WarningPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WarningPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("Prompt".parse::<WarningPolicy>().unwrap(), WarningPolicy::Prompt);
        assert_eq!("CONTINUE".parse::<WarningPolicy>().unwrap(), WarningPolicy::Continue);
        assert_eq!("stop".parse::<WarningPolicy>().unwrap(), WarningPolicy::Stop);
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(
            "later".parse::<WarningPolicy>(),
            Err(DomainError::UnknownWarningPolicy("later".into()))
        );
    }

    #[test]
    fn default_is_prompt() {
        assert_eq!(WarningPolicy::default(), WarningPolicy::Prompt);
    }
}
