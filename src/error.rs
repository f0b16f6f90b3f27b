//! Error handling for apractool.
//! Defines the error taxonomy and the result type used throughout the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::stubs::Extension;

/// Error types for apractool operations.
///
/// Validation variants abort a whole request, per-artifact variants
/// (`AlreadyExistsError`, `StubReadError`, `WriteError`) only abandon one
/// extension, everything else is fatal to the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration loading or parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur while rendering a stub
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents failures of the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The template name or target directory was not provided
    #[error("Missing {0}.")]
    MissingInputError(&'static str),

    /// The template name does not match the accepted shape
    #[error("Template name '{name}' has an invalid format.")]
    InvalidNameError { name: String },

    /// The template name ends with a namespace separator
    #[error("Template name '{name}' does not end with a file name.")]
    EmptyFileNameError { name: String },

    /// The artifact is already present in the target directory
    #[error("{file_name} already exists.")]
    AlreadyExistsError { file_name: String },

    /// The stub for an extension could not be read
    #[error("{source}")]
    StubReadError { extension: Extension, source: io::Error },

    /// The rendered artifact could not be written
    #[error("{source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// Convenience type alias for Results with apractool's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
