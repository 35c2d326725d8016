use chat_html::{
    cli::{self, CliArgs, CliError, error::EXIT_USAGE},
    config::Settings,
};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests also arrive here. Tracing is not set up
            // yet, so a failed write to the terminal is ignored and the exit
            // code alone reports the outcome.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Load configuration
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => return report(CliError::Argument(format!("invalid configuration: {}", e))),
    };

    // Initialize tracing; stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli::run(&args, settings) {
        Ok(summary) => {
            println!("HTML chat interface saved to {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn report(err: CliError) -> ExitCode {
    eprintln!("{}", err);
    err.exit_code()
}
