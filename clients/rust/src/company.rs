use crate::request::{RequestDescriptor, RequestExecutor};
use reqwest::Method;
use ruoyi_company_api_structs::*;
use ruoyi_company_domain::{CompanyId, Query};
use serde_json::Value;
use std::sync::Arc;

const BASE_PATH: &str = "/system/company";

/// Client for the company endpoints.
///
/// Every method issues exactly one request through the executor and hands
/// back its result untouched, including its errors.
pub struct CompanyClient<E> {
    executor: Arc<E>,
}

impl<E> Clone for CompanyClient<E> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor.clone(),
        }
    }
}

impl<E: RequestExecutor> CompanyClient<E> {
    pub(crate) fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }

    pub async fn list(&self, query: list_companies::QueryParams) -> Result<Value, E::Error> {
        let descriptor = RequestDescriptor::new(Method::GET, format!("{}/list", BASE_PATH))
            .with_params(query);
        self.executor.execute(descriptor).await
    }

    pub async fn get<I: Into<CompanyId>>(&self, company_id: I) -> Result<Value, E::Error> {
        let descriptor = RequestDescriptor::new(
            Method::GET,
            format!("{}/{}", BASE_PATH, company_id.into().path_segment()),
        );
        self.executor.execute(descriptor).await
    }

    pub async fn add(&self, record: add_company::RequestBody) -> Result<Value, E::Error> {
        let descriptor =
            RequestDescriptor::new(Method::POST, BASE_PATH).with_data(Value::Object(record));
        self.executor.execute(descriptor).await
    }

    pub async fn update(&self, record: update_company::RequestBody) -> Result<Value, E::Error> {
        let descriptor =
            RequestDescriptor::new(Method::PUT, BASE_PATH).with_data(Value::Object(record));
        self.executor.execute(descriptor).await
    }

    /// Sends `{id, status}` and nothing else
    pub async fn change_status<I: Into<CompanyId>, S: Into<String>>(
        &self,
        company_id: I,
        status: S,
    ) -> Result<Value, E::Error> {
        let body = change_company_status::RequestBody::new(company_id, status);
        let descriptor = RequestDescriptor::new(Method::PUT, BASE_PATH)
            .with_data(Value::Object(body.into_record()));
        self.executor.execute(descriptor).await
    }

    pub async fn remove<I: Into<CompanyId>>(&self, company_id: I) -> Result<Value, E::Error> {
        let descriptor = RequestDescriptor::new(
            Method::DELETE,
            format!("{}/{}", BASE_PATH, company_id.into().path_segment()),
        );
        self.executor.execute(descriptor).await
    }

    /// Deletes several companies in one request. The ids are joined with
    /// `,` into a single path segment.
    ///
    /// An empty slice sends nothing and resolves to `Value::Null`, since
    /// `DELETE /system/company/` does not address any company.
    pub async fn remove_many(&self, company_ids: &[CompanyId]) -> Result<Value, E::Error> {
        if company_ids.is_empty() {
            return Ok(Value::Null);
        }
        let descriptor = RequestDescriptor::new(
            Method::DELETE,
            format!("{}/{}", BASE_PATH, CompanyId::join(company_ids)),
        );
        self.executor.execute(descriptor).await
    }

    /// Downloads the companies matching `query` as a spreadsheet
    pub async fn export(&self, query: export_companies::QueryParams) -> Result<Vec<u8>, E::Error> {
        let descriptor = RequestDescriptor::new(Method::POST, format!("{}/export", BASE_PATH))
            .with_params(query);
        self.executor.download(descriptor).await
    }

    /// Typed variant of `list`
    pub async fn list_page(&self, query: CompanyPageQuery) -> Result<Value, E::Error> {
        self.list(Query::from(query)).await
    }

    /// Typed variant of `add`
    pub async fn add_company(&self, company: &dtos::CompanyDTO) -> Result<Value, E::Error> {
        self.add(company.to_record()).await
    }

    /// Typed variant of `update`
    pub async fn update_company(&self, company: &dtos::CompanyDTO) -> Result<Value, E::Error> {
        self.update(company.to_record()).await
    }
}
