mod config;

pub use config::Config;
use ruoyi_company_sdk::RuoyiSDK;
use std::time::Duration;

#[derive(Clone)]
pub struct CompanyContext {
    pub config: Config,
    pub sdk: RuoyiSDK,
}

impl CompanyContext {
    pub fn create(config: Config) -> Self {
        let sdk = RuoyiSDK::with_timeout(
            config.api_address.clone(),
            config.api_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );
        Self { config, sdk }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_the_config_it_was_built_from() {
        let config = Config {
            api_address: "http://admin.internal:9099".into(),
            api_token: Some("token".into()),
            request_timeout_secs: 7,
        };
        let context = CompanyContext::create(config);
        assert_eq!(context.config.api_address, "http://admin.internal:9099");
        assert_eq!(context.config.api_token.as_deref(), Some("token"));
        assert_eq!(context.config.request_timeout_secs, 7);
    }
}
