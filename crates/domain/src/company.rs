use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Status flag of a company. The server stores it as a one character
/// string: `"0"` for normal and `"1"` for disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStatus {
    #[serde(rename = "0")]
    Normal,
    #[serde(rename = "1")]
    Disabled,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "0",
            Self::Disabled => "1",
        }
    }
}

impl Default for CompanyStatus {
    fn default() -> Self {
        Self::Normal
    }
}

impl Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<CompanyStatus> for String {
    fn from(status: CompanyStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid company status: {0}")]
pub struct InvalidStatusError(String);

impl FromStr for CompanyStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "normal" => Ok(Self::Normal),
            "1" | "disabled" => Ok(Self::Disabled),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}
