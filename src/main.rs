use anyhow::Result;
use clap::Parser;

use mvn_shepherd::builder::{BuildOrchestrator, MavenInvoker};
use mvn_shepherd::cli::Cli;
use mvn_shepherd::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    let orchestrator = BuildOrchestrator::new(&config, MavenInvoker);
    let outcome = orchestrator.run();

    // The report covers every module processed so far, also on a fail-fast
    // abort; print it before propagating the failure.
    outcome.report.print();

    if let Some(failure) = outcome.aborted {
        return Err(failure.into());
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mvn_shepherd={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
