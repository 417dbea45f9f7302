//! Error types for prompter.

use std::path::PathBuf;

/// Result type alias for prompter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a command tree or running commands.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A sibling command with the same name is already registered.
    #[error("command {name} already exists")]
    DuplicateCommand {
        /// The conflicting command name.
        name: String,
    },

    /// An option with the same name is already registered on this node.
    #[error("option {name} already exists")]
    DuplicateOption {
        /// The conflicting option name.
        name: String,
    },

    /// `add_subcommands` was called with nothing to add.
    #[error("no subcommands provided")]
    NoSubcommands,

    /// The requested argument was not given on the command line.
    #[error("{key} is not present")]
    MissingArgument {
        /// The argument key that was looked up.
        key: String,
    },

    /// The argument was given but no value followed it.
    #[error("{key} has no associated value")]
    NoValue {
        /// The argument key that was looked up.
        key: String,
    },

    /// Fewer repetitions of the argument than requested.
    #[error("{key} has {available} values, got {requested}")]
    NotEnoughValues {
        /// The argument key that was looked up.
        key: String,
        /// How many values the argument carries.
        available: usize,
        /// The 1-based position that was requested.
        requested: usize,
    },

    /// Failure reported by a command executor.
    #[error("{message}")]
    Command {
        /// Human readable description of the failure.
        message: String,
    },

    /// I/O error while reading or writing session state.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Session state could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create an executor failure
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
        }
    }

    /// Create a duplicate command error
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand { name: name.into() }
    }

    /// Create a duplicate option error
    pub fn duplicate_option(name: impl Into<String>) -> Self {
        Self::DuplicateOption { name: name.into() }
    }

    /// Create a missing argument error
    pub fn missing_argument(key: impl Into<String>) -> Self {
        Self::MissingArgument { key: key.into() }
    }

    /// Create a missing value error
    pub fn no_value(key: impl Into<String>) -> Self {
        Self::NoValue { key: key.into() }
    }

    /// True for errors raised while registering the command tree
    #[must_use]
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCommand { .. } | Self::DuplicateOption { .. } | Self::NoSubcommands
        )
    }
}
