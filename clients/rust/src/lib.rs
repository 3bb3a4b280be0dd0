mod base;
mod company;
mod request;

pub use base::{APIError, APIResponse, BaseClient};
pub use company::CompanyClient;
pub use request::{RequestDescriptor, RequestExecutor};
pub use reqwest::Method;
pub use ruoyi_company_api_structs::dtos::*;
pub use ruoyi_company_api_structs::{
    AjaxResult, CompanyPageQuery, EnvelopeError, TableDataInfo, SUCCESS_CODE,
};
pub use ruoyi_company_domain::{CompanyId, CompanyStatus, InvalidIDError, Query, Record};

// Typed responses
pub use ruoyi_company_api_structs::get_company::APIResponse as CompanyResponse;
pub use ruoyi_company_api_structs::list_companies::APIResponse as CompanyPage;
pub use ruoyi_company_api_structs::AckResponse;

use std::{sync::Arc, time::Duration};

/// Company administration SDK
///
/// The SDK contains methods for interacting with the company endpoints of the
/// administration server. It talks HTTP through `BaseClient` unless another
/// `RequestExecutor` is supplied with `RuoyiSDK::with_executor`.
pub struct RuoyiSDK<E = BaseClient> {
    pub company: CompanyClient<E>,
}

impl<E> Clone for RuoyiSDK<E> {
    fn clone(&self) -> Self {
        Self {
            company: self.company.clone(),
        }
    }
}

impl RuoyiSDK<BaseClient> {
    pub fn new(address: String, token: Option<String>) -> Self {
        let mut base = BaseClient::new(address);
        if let Some(token) = token {
            base.set_token(token);
        }
        Self::with_executor(base)
    }

    pub fn with_timeout(address: String, token: Option<String>, timeout: Duration) -> Self {
        let mut base = BaseClient::new(address);
        if let Some(token) = token {
            base.set_token(token);
        }
        base.set_timeout(timeout);
        Self::with_executor(base)
    }
}

impl<E: RequestExecutor> RuoyiSDK<E> {
    pub fn with_executor(executor: E) -> Self {
        Self::from_shared(Arc::new(executor))
    }

    pub fn from_shared(executor: Arc<E>) -> Self {
        let company = CompanyClient::new(executor);
        Self { company }
    }
}
