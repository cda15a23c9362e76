mod cli;
mod config;
mod error;
mod github;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use co2_core::Runner;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes. This is the
    // single place a failure becomes user-visible: one ::error::
    // workflow command, one diagnostic report, no report.txt.
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        github::error(&err.to_string());
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Shell completions generation needs no configuration
    if let Some(Command::Completions(args)) = cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "co2-action", &mut std::io::stdout());
        return Ok(());
    }

    let run_config = config::resolve_config(&cli.inputs)?;
    let analytics_requested = run_config.cloudflare.enabled;

    let outcome = Runner::new(run_config).run().await?;

    if analytics_requested && !outcome.analytics_included {
        github::warning(
            "Cloudflare analytics unavailable; the report omits the [cloudflare] section",
        );
    }

    github::set_output("estimated-co2-grams", &outcome.estimated_grams.to_string());

    if !cli.global.quiet {
        println!(
            "Report written to {} ({} bytes, {:.4} g CO2)",
            outcome.report_path.display(),
            outcome.total_bytes,
            outcome.estimated_grams,
        );
    }

    Ok(())
}
