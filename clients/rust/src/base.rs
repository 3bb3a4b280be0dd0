use crate::request::{RequestDescriptor, RequestExecutor};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default `RequestExecutor` talking to the server over HTTP with reqwest.
pub struct BaseClient {
    address: String,
    token: Option<String>,
    timeout: Option<Duration>,
    client: Client,
}

#[derive(Error, Debug)]
pub enum APIError {
    #[error("Unable to reach the server: {0}")]
    Network(#[source] reqwest::Error),
    #[error("The request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("The response body could not be decoded: {0}")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("The request was not authenticated")]
    Unauthenticated,
    #[error("Not allowed to perform the request")]
    Unauthorized,
    #[error("404 Not found")]
    NotFound,
    #[error("Unexpected status code: {0}")]
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            token: None,
            timeout: None,
            client: Client::new(),
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn get_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.address, path)
        } else {
            format!("{}/{}", self.address, path)
        }
    }

    fn get_client(&self, descriptor: &RequestDescriptor) -> RequestBuilder {
        let url = self.get_url(&descriptor.url);
        let mut builder = self.client.request(descriptor.method.clone(), &url);

        if let Some(params) = &descriptor.params {
            builder = builder.query(params);
        }
        if let Some(data) = &descriptor.data {
            builder = builder.json(data);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    fn check_status_code(&self, res: &Response) -> Result<(), APIError> {
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        warn!("Request to {} failed with status: {}", res.url().path(), status);
        match status {
            StatusCode::UNAUTHORIZED => Err(APIError::Unauthenticated),
            StatusCode::FORBIDDEN => Err(APIError::Unauthorized),
            StatusCode::NOT_FOUND => Err(APIError::NotFound),
            _ => Err(APIError::UnexpectedStatusCode(status)),
        }
    }

    async fn send(&self, descriptor: &RequestDescriptor) -> APIResponse<Response> {
        debug!(
            "{} {}",
            descriptor.method,
            self.get_url(&descriptor.path_and_query())
        );
        let res = self
            .get_client(descriptor)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    APIError::Timeout(e)
                } else {
                    APIError::Network(e)
                }
            })?;
        self.check_status_code(&res)?;
        Ok(res)
    }
}

#[async_trait]
impl RequestExecutor for BaseClient {
    type Error = APIError;

    async fn execute(&self, descriptor: RequestDescriptor) -> APIResponse<Value> {
        let res = self.send(&descriptor).await?;
        res.json::<Value>()
            .await
            .map_err(APIError::MalformedResponse)
    }

    async fn download(&self, descriptor: RequestDescriptor) -> APIResponse<Vec<u8>> {
        let res = self.send(&descriptor).await?;
        res.bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(APIError::Network)
    }
}
