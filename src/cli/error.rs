use std::process::ExitCode;

use thiserror::Error;

use crate::input::LoadError;
use crate::services::ExportError;

pub const EXIT_USAGE: u8 = 2;
pub const EXIT_PARSE: u8 = 3;
pub const EXIT_WRITE: u8 = 4;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("argument error: {0}")]
    Argument(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("write error: {0}")]
    Write(String),
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Load(e) => CliError::from(e),
            ExportError::Write(e) => CliError::Write(e.to_string()),
        }
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        CliError::Parse(err.to_string())
    }
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    pub fn code(&self) -> u8 {
        match self {
            CliError::Argument(_) => EXIT_USAGE,
            CliError::Parse(_) => EXIT_PARSE,
            CliError::Write(_) => EXIT_WRITE,
        }
    }
}
