pub mod export_service;

pub use export_service::{ExportError, ExportService, ExportSummary, default_output_path};
