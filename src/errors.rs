/*!
 * Error types for the multilang application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a per-language phrase resource
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource file for the language does not exist
    #[error("no resource file for lang '{lang}' (looked for {path})")]
    NotFound {
        /// Language code that was requested
        lang: String,
        /// Path that was probed
        path: PathBuf,
    },

    /// Error reading the resource file
    #[error("failed to read resource file {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error parsing the resource file as YAML
    #[error("invalid YAML in resource file {path}: {source}")]
    Parse {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },
}

/// Errors that make rendering fail for a single target language
#[derive(Error, Debug)]
pub enum RenderError {
    /// The document carries no `<!--multilang vN ...-->` header directive
    #[error("no multilang header directive found, cannot determine main language")]
    NoHeaderDirective,

    /// The requested target language is not declared in the header table
    #[error("target lang '{0}' is not declared in the multilang header")]
    UnknownTargetLang(String),

    /// A required phrase resource could not be loaded
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// No target language remains after removing the main language
    #[error("no lang specified (or main lang specified)")]
    NoTargetLanguage,

    /// A fixed output file name only makes sense for a single target
    #[error("parameter output with more than one lang")]
    OutputWithMultipleLangs,

    /// Generation requires an output directory
    #[error("no output directory specified")]
    MissingOutputDirectory,

    /// Error from rendering a single language
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Error from a file operation
    #[error("file error: {0}")]
    File(String),

    /// One or more target languages failed to generate
    #[error("generation failed for lang(s): {0}")]
    PartialFailure(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
