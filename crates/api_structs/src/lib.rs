mod company;
mod shared;

pub mod dtos {
    pub use crate::company::dtos::*;
}

pub use crate::company::api::*;
pub use crate::shared::envelope::{AjaxResult, EnvelopeError, TableDataInfo, SUCCESS_CODE};
pub use crate::shared::query::CompanyPageQuery;
