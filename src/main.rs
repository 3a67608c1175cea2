//! helm-chart-gen CLI binary

use std::process::ExitCode;

use helm_chart_gen::cli::CliApp;
use helm_chart_gen::error::{ChartGenError, FAILURE_EXIT_CODE};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helm_chart_gen=info,chart_manifest=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    match CliApp::run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<ChartGenError>()
                .map(ChartGenError::exit_code)
                .unwrap_or(FAILURE_EXIT_CODE);
            ExitCode::from(code)
        }
    }
}
