use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Space {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

/// Login and targeting state, read from `~/.instview/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Service instance store; defaults to `~/.instview/instances.json`.
    #[serde(default)]
    pub store: Option<PathBuf>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub organization: Organization,
    #[serde(default)]
    pub space: Space,
}

impl Config {
    /// Reads the config at `path`, or the default location when `None`.
    /// Only a missing default file yields an empty config; an explicit path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!("No config file at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.store {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::home_dir()?.join("instances.json")),
        }
    }

    fn home_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".instview"))
    }

    /// Fails unless a user is logged in and both an org and a space are targeted.
    pub fn check_target(&self) -> Result<(), ConfigError> {
        self.current_user()?;
        if self.organization.guid.is_empty() {
            return Err(ConfigError::NoOrganizationTargeted);
        }
        if self.space.guid.is_empty() {
            return Err(ConfigError::NoSpaceTargeted);
        }
        Ok(())
    }

    pub fn current_user(&self) -> Result<&User, ConfigError> {
        match &self.user {
            Some(user) if !user.name.is_empty() => Ok(user),
            _ => Err(ConfigError::NotLoggedIn),
        }
    }

    pub fn targeted_organization(&self) -> &Organization {
        &self.organization
    }

    pub fn targeted_space(&self) -> &Space {
        &self.space
    }
}
