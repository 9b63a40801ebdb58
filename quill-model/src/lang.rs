use std::fmt;
use std::str::FromStr;

use crate::error::LangCodeError;

/// Languages the platform serves content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LangCode {
    Ja,
    En,
}

impl LangCode {
    /// Every supported code, in declaration order.
    pub const ALL: [LangCode; 2] = [LangCode::Ja, LangCode::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            LangCode::Ja => "ja",
            LangCode::En => "en",
        }
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LangCode {
    type Err = LangCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LangCodeError::Empty);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "ja" => Ok(LangCode::Ja),
            "en" => Ok(LangCode::En),
            _ => Err(LangCodeError::Unsupported(trimmed.to_string())),
        }
    }
}
