//! Error types for project generation, version lookup and the Gradle runner

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing a project
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown extension '{0}'")]
    UnknownExtension(String),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("circular extension dependency: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),

    /// A module build file was requested for a platform that was not selected
    #[error("module '{0}' is not part of this project")]
    MissingModule(String),

    #[error("bundled resource not found: {}", .0.display())]
    MissingResource(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid selection file {}: {source}", path.display())]
    InvalidSelection {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from the package index; these never abort generation
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("package index returned HTTP {0}")]
    Status(u16),

    #[error("could not parse package index response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no stable version of {0} found")]
    NotFound(String),

    #[error("lookup of {0} timed out")]
    Timeout(String),

    #[error("{0} is not hosted on a searchable repository")]
    Unsupported(String),
}

/// Errors from running Gradle after generation
#[derive(Debug, Error)]
pub enum GradleError {
    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Gradle failed with exit code: {0}")]
    Exit(i32),

    #[error("Gradle process hung and was killed")]
    Hung,
}

pub type Result<T, E = GenerationError> = std::result::Result<T, E>;
