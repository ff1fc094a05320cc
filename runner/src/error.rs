//! Error types for command dispatch and catalog loading.

use command_input_core::{DefinitionError, UsageError};
use thiserror::Error;

/// Failure reported by a command's own [`execute`](crate::Command::execute).
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command read its input with an undeclared name or the wrong type.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Writing to the output sink or other I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other command-specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors raised while registering commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command was registered with an empty name.
    #[error("command name cannot be empty")]
    EmptyName,

    /// Two commands were registered under the same name.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
}

/// Defect propagated out of [`CommandRunner::run`](crate::CommandRunner::run).
///
/// User input problems never produce this error; they are written to the
/// error stream and turned into a failing exit code instead.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The command declared an invalid input definition.
    #[error("invalid input definition for command '{command}': {source}")]
    Definition {
        /// Command name
        command: String,
        /// Underlying declaration error
        #[source]
        source: DefinitionError,
    },

    /// The command failed while executing.
    #[error("command '{command}' failed: {source}")]
    Command {
        /// Command name
        command: String,
        /// Underlying command failure
        #[source]
        source: CommandError,
    },
}

/// Errors that can occur while loading or saving a definition catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A catalog entry has an empty command name.
    #[error("catalog command name cannot be empty")]
    EmptyCommandName,
}

/// Convenience alias for results with [`CatalogError`].
pub(crate) type Result<T> = std::result::Result<T, CatalogError>;
