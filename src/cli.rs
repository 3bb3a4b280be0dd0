use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ruoyi_company_infra::Config;
use ruoyi_company_sdk::{
    CompanyClient, CompanyId, CompanyPageQuery, CompanyStatus, InvalidIDError, Query, Record,
    RequestExecutor,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Manage companies through the administration api
#[derive(Debug, Parser)]
#[command(name = "company", version)]
pub struct Cli {
    /// Api address, overrides RUOYI_API_ADDRESS
    #[arg(long, global = true)]
    pub address: Option<String>,
    /// Bearer token, overrides RUOYI_API_TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,
    /// Request timeout in seconds, overrides RUOYI_API_TIMEOUT_SECS
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List companies matching the filters
    List(Filters),
    /// Show one company
    Get {
        #[arg(value_parser = parse_company_id)]
        id: CompanyId,
    },
    /// Create a company from a JSON object
    Add { record: String },
    /// Update a company from a JSON object, the object must carry the `id`
    Update { record: String },
    /// Change the status of a company (0 / normal, 1 / disabled)
    Status {
        #[arg(value_parser = parse_company_id)]
        id: CompanyId,
        status: CompanyStatus,
    },
    /// Delete one or more companies
    Remove {
        #[arg(required = true, value_parser = parse_company_id)]
        ids: Vec<CompanyId>,
    },
    /// Export the companies matching the filters to a spreadsheet
    Export {
        #[command(flatten)]
        filters: Filters,
        #[arg(short, long, default_value = "company.xlsx")]
        output: PathBuf,
    },
}

#[derive(Debug, Args, Default)]
pub struct Filters {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub status: Option<CompanyStatus>,
    /// Created on or after, YYYY-MM-DD
    #[arg(long)]
    pub begin_time: Option<NaiveDate>,
    /// Created on or before, YYYY-MM-DD
    #[arg(long)]
    pub end_time: Option<NaiveDate>,
    #[arg(long)]
    pub page_num: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Extra query parameter passed as is
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.api_address = address.clone();
        }
        if let Some(token) = &self.token {
            config.api_token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
    }
}

impl Filters {
    pub fn into_query(self) -> Query {
        let mut query = CompanyPageQuery {
            name: self.name,
            city: self.city,
            status: self.status,
            begin_time: self.begin_time,
            end_time: self.end_time,
            page_num: self.page_num,
            page_size: self.page_size,
        }
        .into_query();
        query.extend(self.params);
        query
    }
}

/// Numeric ids stay numeric on the wire. `,` and `/` are rejected so one
/// argument always addresses one company.
fn parse_company_id(s: &str) -> Result<CompanyId, InvalidIDError> {
    s.parse()
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid KEY=VALUE: no `=` found in `{}`", s)),
    }
}

fn parse_record(raw: &str) -> anyhow::Result<Record> {
    let value: Value = serde_json::from_str(raw).context("Record is not valid JSON")?;
    match value {
        Value::Object(record) => Ok(record),
        _ => bail!("Record must be a JSON object"),
    }
}

fn print_payload(payload: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

pub async fn run<E: RequestExecutor>(
    command: Command,
    company: &CompanyClient<E>,
) -> anyhow::Result<()> {
    let payload = match command {
        Command::List(filters) => company.list(filters.into_query()).await?,
        Command::Get { id } => company.get(id).await?,
        Command::Add { record } => company.add(parse_record(&record)?).await?,
        Command::Update { record } => company.update(parse_record(&record)?).await?,
        Command::Status { id, status } => company.change_status(id, status).await?,
        Command::Remove { ids } => {
            if ids.len() == 1 {
                company.remove(ids[0].clone()).await?
            } else {
                company.remove_many(&ids).await?
            }
        }
        Command::Export { filters, output } => {
            let bytes = company.export(filters.into_query()).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("Unable to write {}", output.display()))?;
            info!("Exported {} bytes to {}", bytes.len(), output.display());
            println!("{}", output.display());
            return Ok(());
        }
    };
    print_payload(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ruoyi_company_sdk::{Method, RequestDescriptor, RuoyiSDK};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingExecutor {
        requests: Mutex<Vec<RequestDescriptor>>,
    }

    #[async_trait]
    impl RequestExecutor for RecordingExecutor {
        type Error = std::io::Error;

        async fn execute(&self, descriptor: RequestDescriptor) -> Result<Value, std::io::Error> {
            self.requests.lock().unwrap().push(descriptor);
            Ok(json!({ "code": 200, "msg": "ok" }))
        }

        async fn download(
            &self,
            descriptor: RequestDescriptor,
        ) -> Result<Vec<u8>, std::io::Error> {
            self.requests.lock().unwrap().push(descriptor);
            Ok(vec![1, 2, 3])
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("company").chain(args.iter().copied()))
            .expect("To parse args")
    }

    async fn run_with_recorder(args: &[&str]) -> Vec<RequestDescriptor> {
        let executor = Arc::new(RecordingExecutor::default());
        let sdk = RuoyiSDK::from_shared(executor.clone());
        run(parse(args).command, &sdk.company)
            .await
            .expect("To run command");
        let requests = executor.requests.lock().unwrap().clone();
        requests
    }

    #[test]
    fn overrides_config() {
        let cli = parse(&["--token", "abc", "--timeout", "3", "get", "1"]);
        let mut config = Config {
            api_address: "http://localhost:9099".into(),
            api_token: None,
            request_timeout_secs: 30,
        };
        cli.apply_overrides(&mut config);
        assert_eq!(config.api_address, "http://localhost:9099");
        assert_eq!(config.api_token.as_deref(), Some("abc"));
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn rejects_bad_arguments() {
        let base = std::iter::once("company");
        assert!(Cli::try_parse_from(base.clone().chain(["status", "1", "7"])).is_err());
        assert!(Cli::try_parse_from(base.clone().chain(["remove"])).is_err());
        assert!(Cli::try_parse_from(base.chain(["list", "--param", "nokey"])).is_err());
    }

    #[test]
    fn ids_are_parsed_like_the_server_expects() {
        match parse(&["get", "42"]).command {
            Command::Get { id } => assert_eq!(id, CompanyId::Int(42)),
            other => panic!("Expected get, got {:?}", other),
        }
        match parse(&["status", "c-01", "1"]).command {
            Command::Status { id, status } => {
                assert_eq!(id, CompanyId::Str("c-01".into()));
                assert_eq!(status, CompanyStatus::Disabled);
            }
            other => panic!("Expected status, got {:?}", other),
        }
        match parse(&["remove", "1", "x2"]).command {
            Command::Remove { ids } => {
                assert_eq!(ids, vec![CompanyId::Int(1), CompanyId::Str("x2".into())])
            }
            other => panic!("Expected remove, got {:?}", other),
        }
    }

    #[test]
    fn ids_with_separators_are_rejected() {
        let base = std::iter::once("company");
        assert!(Cli::try_parse_from(base.clone().chain(["get", "1,2"])).is_err());
        assert!(Cli::try_parse_from(base.clone().chain(["get", "a/b"])).is_err());
        assert!(Cli::try_parse_from(base.clone().chain(["remove", "1,2"])).is_err());
        assert!(Cli::try_parse_from(base.chain(["status", "7/1", "0"])).is_err());
    }

    #[test]
    fn records_must_be_objects() {
        assert!(parse_record(r#"{"name":"Acme"}"#).is_ok());
        assert!(parse_record("[1, 2]").is_err());
        assert!(parse_record("{").is_err());
    }

    #[tokio::test]
    async fn list_builds_query_from_filters() {
        let requests = run_with_recorder(&[
            "list",
            "--name",
            "Acme",
            "--status",
            "disabled",
            "--begin-time",
            "2024-01-01",
            "--param",
            "orderBy=name",
        ])
        .await;

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(
            requests[0].path_and_query(),
            "/system/company/list?beginTime=2024-01-01&name=Acme&orderBy=name&status=1"
        );
    }

    #[tokio::test]
    async fn status_and_remove_commands() {
        let requests = run_with_recorder(&["status", "7", "0"]).await;
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].data, Some(json!({ "id": 7, "status": "0" })));

        let requests = run_with_recorder(&["remove", "3"]).await;
        assert_eq!(requests[0].url, "/system/company/3");

        let requests = run_with_recorder(&["remove", "3", "abc"]).await;
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].url, "/system/company/3,abc");
    }

    #[tokio::test]
    async fn add_sends_record() {
        let requests = run_with_recorder(&["add", r#"{"name":"Acme","city":"Xiamen"}"#]).await;
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].data,
            Some(json!({ "name": "Acme", "city": "Xiamen" }))
        );
    }
}
