//! Error handling for stencil.
//! Defines the error taxonomy and the result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating files.
///
/// Every variant is fatal to the source document being processed; the
/// driver decides whether the batch continues.
#[derive(Error, Debug)]
pub enum Error {
    /// The source path given on the command line does not exist.
    #[error("Source '{}' does not exist.", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source document is not valid YAML/JSON or has an invalid shape.
    #[error("Failed to parse '{}': {reason}.", path.display())]
    ParseError { path: PathBuf, reason: String },

    /// The top level of the source document is not a mapping.
    #[error("Source document '{}' must contain a mapping at the top level.", path.display())]
    NotAMapping { path: PathBuf },

    /// `metadata` or `template_data` is present but not a mapping.
    #[error("'{section}' in '{}' must be a mapping.", path.display())]
    SectionNotAMapping { path: PathBuf, section: &'static str },

    /// A directive's template path does not exist.
    #[error("Template '{}' does not exist.", path.display())]
    TemplateNotFound { path: PathBuf },

    /// Several templates were directed to a single fixed output file.
    #[error(
        "Output '{}' names a single file but {count} templates were resolved for it.",
        output.display()
    )]
    AmbiguousOutput { output: PathBuf, count: usize },

    /// The template engine failed: syntax fault, undefined variable, filter failure.
    #[error("Failed to render template '{}': {source}", template.display())]
    RenderError {
        template: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// Output directories or files could not be written.
    #[error("Failed to write '{}': {source}.", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents other errors that occur during file system operations.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// One or more source documents of a batch failed.
    #[error("{failed} of {total} source documents failed.")]
    BatchFailed { failed: usize, total: usize },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
