use crate::dtos::CompanyDTO;
use crate::{AjaxResult, TableDataInfo};
use ruoyi_company_domain::{CompanyId, Query, Record};
use serde::{Deserialize, Serialize};

/// Acknowledgement of a mutating request. The server only reports a message.
pub type AckResponse = AjaxResult<serde_json::Value>;

pub mod list_companies {
    use super::*;

    pub type QueryParams = Query;

    pub type APIResponse = TableDataInfo<CompanyDTO>;
}

pub mod get_company {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub company_id: CompanyId,
    }

    pub type APIResponse = AjaxResult<CompanyDTO>;
}

pub mod add_company {
    use super::*;

    pub type RequestBody = Record;

    pub type APIResponse = AckResponse;
}

pub mod update_company {
    use super::*;

    pub type RequestBody = Record;

    pub type APIResponse = AckResponse;
}

pub mod change_company_status {
    use super::*;

    /// Exactly these two fields go on the wire
    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
    pub struct RequestBody {
        pub id: CompanyId,
        pub status: String,
    }

    impl RequestBody {
        pub fn new<I: Into<CompanyId>, S: Into<String>>(id: I, status: S) -> Self {
            Self {
                id: id.into(),
                status: status.into(),
            }
        }

        pub fn into_record(self) -> Record {
            let mut record = Record::new();
            record.insert("id".into(), self.id.into());
            record.insert("status".into(), serde_json::Value::String(self.status));
            record
        }
    }

    pub type APIResponse = AckResponse;
}

pub mod delete_company {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub company_ids: Vec<CompanyId>,
    }

    pub type APIResponse = AckResponse;
}

pub mod export_companies {
    use super::*;

    pub type QueryParams = Query;
}
