pub mod args;
pub mod error;

pub use args::CliArgs;
pub use error::CliError;

use crate::config::Settings;
use crate::services::{ExportService, ExportSummary};

/// Execute one conversion as described by the command line
pub fn run(args: &CliArgs, mut settings: Settings) -> Result<ExportSummary, CliError> {
    args.apply(&mut settings).map_err(CliError::Argument)?;

    let output = args.output_path();
    tracing::info!(
        "Converting {} -> {}",
        args.input.display(),
        output.display()
    );

    let service = ExportService::new(settings.render);
    let summary = service.export(&args.input, &output)?;

    tracing::info!(
        "Rendered {} messages ({} bytes)",
        summary.message_count,
        summary.bytes
    );

    Ok(summary)
}
