use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// `code` the server puts in the envelope of a successful response
pub const SUCCESS_CODE: i64 = 200;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("The server rejected the request with code {code}: {msg}")]
    Rejected { code: i64, msg: String },
    #[error("The response payload did not match the expected envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Envelope wrapping single record and acknowledgement responses.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AjaxResult<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T: DeserializeOwned> AjaxResult<T> {
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn ensure_success(self) -> Result<Self, EnvelopeError> {
        if self.code == SUCCESS_CODE {
            Ok(self)
        } else {
            Err(EnvelopeError::Rejected {
                code: self.code,
                msg: self.msg,
            })
        }
    }

    pub fn into_data(self) -> Result<Option<T>, EnvelopeError> {
        self.ensure_success().map(|res| res.data)
    }
}

/// Envelope of paginated list responses.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableDataInfo<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page_num: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub has_next: Option<bool>,
}

impl<T: DeserializeOwned> TableDataInfo<T> {
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn ensure_success(self) -> Result<Self, EnvelopeError> {
        if self.code == SUCCESS_CODE {
            Ok(self)
        } else {
            Err(EnvelopeError::Rejected {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}
