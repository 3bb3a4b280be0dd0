mod cli;
mod telemetry;

use clap::Parser;
use cli::Cli;
use ruoyi_company_infra::{CompanyContext, Config};
use telemetry::{get_subscriber, init_subscriber};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("company".into(), "warn".into());
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply_overrides(&mut config);

    let context = CompanyContext::create(config);
    debug!(
        "Sending requests to {} with a {}s timeout",
        context.config.api_address, context.config.request_timeout_secs
    );
    cli::run(cli.command, &context.sdk.company).await
}
