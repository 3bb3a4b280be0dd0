use ruoyi_company_domain::{CompanyId, CompanyStatus, Record};
use serde::{Deserialize, Serialize};

/// A company as the server returns it. Every field is optional because the
/// server omits what is unset and accepts partial records on update.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl CompanyDTO {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Parsed status, `None` when unset or not one of the known flags
    pub fn company_status(&self) -> Option<CompanyStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// The record sent as request body. Only fields that are set are
    /// included.
    pub fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(record)) => record,
            _ => Record::new(),
        }
    }
}
