// src/main.rs
use tracing_subscriber::EnvFilter;

use horus::cases;
use horus::client::ProbeClient;
use horus::config::Config;
use horus::report;
use horus::runner::Runner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr, the report owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("horus=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let suite = cases::suite(&config.runner.suite)?;
    let client = ProbeClient::new(&config)?;

    report::print_banner(client.base_url(), &config.runner.suite, suite.len());

    let runner = Runner::from_config(&config);
    let summary = runner.run(&suite, &client).await;

    report::print_summary(&summary);

    let code = report::exit_code(&suite, &summary);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
