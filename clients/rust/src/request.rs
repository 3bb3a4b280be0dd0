use async_trait::async_trait;
use reqwest::Method;
use ruoyi_company_domain::Query;
use serde_json::Value;

/// Everything needed to perform one HTTP request. The `url` is relative to
/// the api address the executor is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub params: Option<Query>,
    pub data: Option<Value>,
}

impl RequestDescriptor {
    pub fn new<T: Into<String>>(method: Method, url: T) -> Self {
        Self {
            url: url.into(),
            method,
            params: None,
            data: None,
        }
    }

    pub fn with_params(mut self, params: Query) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The url with the params appended as a form urlencoded query string
    pub fn path_and_query(&self) -> String {
        match &self.params {
            Some(params) if !params.is_empty() => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter())
                    .finish();
                format!("{}?{}", self.url, query)
            }
            _ => self.url.clone(),
        }
    }
}

/// Performs the requests described by a `RequestDescriptor`.
///
/// Implementations decide how to talk to the server and what their errors
/// look like. Callers of the resource clients receive those errors as is.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Performs the request and returns the decoded JSON response payload
    async fn execute(&self, descriptor: RequestDescriptor) -> Result<Value, Self::Error>;

    /// Performs the request and returns the raw response body
    async fn download(&self, descriptor: RequestDescriptor) -> Result<Vec<u8>, Self::Error>;
}
