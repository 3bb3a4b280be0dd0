use serde::{de::Visitor, Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Display, str::FromStr};
use thiserror::Error;

/// Identifier of a company on the server.
///
/// The server accepts both numeric and string ids, so the id keeps whatever
/// representation it was created with and serializes back to the same JSON
/// scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompanyId {
    Int(i64),
    Str(String),
}

impl CompanyId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The id percent-encoded for use as a single url path segment, so that
    /// characters like `?`, `#`, `/` or `%` never change the requested path
    pub fn path_segment(&self) -> String {
        url::form_urlencoded::byte_serialize(self.as_string().as_bytes())
            .collect::<String>()
            .replace('+', "%20")
    }

    /// Joins several ids the way the server expects them in a batch path
    /// segment: `1,2,abc`. Each id is encoded on its own, so only the
    /// separators are literal commas.
    pub fn join(ids: &[CompanyId]) -> String {
        ids.iter()
            .map(|id| id.path_segment())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for CompanyId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for CompanyId {
    fn from(id: i32) -> Self {
        Self::Int(id as i64)
    }
}

impl From<String> for CompanyId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<&str> for CompanyId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<CompanyId> for serde_json::Value {
    fn from(id: CompanyId) -> Self {
        match id {
            CompanyId::Int(id) => Self::from(id),
            CompanyId::Str(id) => Self::String(id),
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for CompanyId {
    type Err = InvalidIDError;

    /// Digits become a numeric id, anything else non-empty is kept as a
    /// string id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.contains(',') || s.contains('/') {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        match s.parse::<i64>() {
            Ok(id) => Ok(Self::Int(id)),
            Err(_) => Ok(Self::Str(s.to_string())),
        }
    }
}

impl Serialize for CompanyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Int(id) => serializer.serialize_i64(*id),
            Self::Str(id) => serializer.serialize_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CompanyIdVisitor;

        impl<'de> Visitor<'de> for CompanyIdVisitor {
            type Value = CompanyId;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or integer company id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<CompanyId, E>
            where
                E: serde::de::Error,
            {
                Ok(CompanyId::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<CompanyId, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(CompanyId::Int)
                    .map_err(|_| E::custom(format!("Company id out of range: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<CompanyId, E>
            where
                E: serde::de::Error,
            {
                Ok(CompanyId::Str(value.to_string()))
            }
        }

        deserializer.deserialize_any(CompanyIdVisitor)
    }
}
