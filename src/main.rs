use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};
use vacancy_contract::{consts::DEFAULT_LOG_FILTERS, opts::Opts, run_all, VacancyClient};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_env_var("LOG")
        .with_default_directive(opts.log.into())
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry().with(filter).with(layer()).init();

    let client = VacancyClient::new(&opts.base_url, opts.timeout())?;
    let scenarios = opts.selected_scenarios();
    info!(base_url = client.base_url(), profile = ?opts.profile, "running {} scenarios", scenarios.len());

    let report = run_all(&client, opts.profile, &scenarios).await;
    if report.is_success() {
        info!("all {} scenarios passed", report.passed.len());
        Ok(ExitCode::SUCCESS)
    } else {
        let failed: Vec<_> = report.failed.iter().map(|(scenario, _)| scenario.name()).collect();
        warn!(passed = report.passed.len(), "failed: {}", failed.join(", "));
        Ok(ExitCode::FAILURE)
    }
}
