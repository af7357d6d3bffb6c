use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a retrieval backend.
#[derive(Error, Debug)]
pub enum ActorError {
    #[error("Service instance '{name}' not found")]
    ServiceInstanceNotFound { name: String },

    #[error("Service instance '{name}' does not support fetching parameters.")]
    ParametersNotSupported { name: String },

    #[error("Failed to read service instance store {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse service instance store {path}: {source}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Not logged in. Set [user] name in the config file.")]
    NotLoggedIn,

    #[error("No org targeted. Set [organization] guid and name in the config file.")]
    NoOrganizationTargeted,

    #[error("No space targeted. Set [space] guid and name in the config file.")]
    NoSpaceTargeted,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to determine home directory")]
    NoHomeDirectory,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
