use tracing::{info, warn};

const API_ADDRESS_ENV: &str = "RUOYI_API_ADDRESS";
const API_TOKEN_ENV: &str = "RUOYI_API_TOKEN";
const REQUEST_TIMEOUT_ENV: &str = "RUOYI_API_TIMEOUT_SECS";

const DEFAULT_API_ADDRESS: &str = "http://localhost:9099";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the administration api that the company paths are
    /// appended to
    pub api_address: String,
    /// Bearer token sent with every request. Requests are sent without an
    /// `Authorization` header when this is not set.
    pub api_token: Option<String>,
    /// Maximum time in seconds to wait for a response
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let api_address = match std::env::var(API_ADDRESS_ENV) {
            Ok(address) if !address.trim().is_empty() => address,
            _ => {
                info!(
                    "Did not find {} environment variable. Using the default address: {}",
                    API_ADDRESS_ENV, DEFAULT_API_ADDRESS
                );
                DEFAULT_API_ADDRESS.into()
            }
        };

        let api_token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if api_token.is_none() {
            info!(
                "Did not find {} environment variable. Requests will be sent unauthenticated.",
                API_TOKEN_ENV
            );
        }

        let request_timeout_secs = match std::env::var(REQUEST_TIMEOUT_ENV) {
            Ok(timeout) => match timeout.parse::<u64>() {
                Ok(timeout) if timeout > 0 => timeout,
                _ => {
                    warn!(
                        "The given {}: {} is not valid, falling back to the default timeout: {}.",
                        REQUEST_TIMEOUT_ENV, timeout, DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            api_address,
            api_token,
            request_timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
