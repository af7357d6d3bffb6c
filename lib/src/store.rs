//! File-backed retrieval: answers the [`Actor`] queries from a JSON snapshot of
//! the platform's service instances.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::actor::{Actor, Fetched};
use crate::error::ActorError;
use crate::model::{BoundApplication, ServiceInstance, ServiceInstanceBundle};

#[derive(Debug, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    service_instances: Vec<StoredInstance>,
}

#[derive(Debug, Deserialize)]
struct StoredInstance {
    space_guid: String,
    #[serde(default)]
    parameters: Option<Value>,
    #[serde(default)]
    bound_apps: Vec<StoredBinding>,
    #[serde(flatten)]
    bundle: ServiceInstanceBundle,
}

#[derive(Debug, Deserialize)]
struct StoredBinding {
    /// Platform-managed bindings, hidden unless internal data is requested.
    #[serde(default)]
    internal: bool,
    #[serde(flatten)]
    app: BoundApplication,
}

#[derive(Debug)]
pub struct JsonStore {
    document: StoreDocument,
}

impl JsonStore {
    pub fn load(path: &Path) -> Result<Self, ActorError> {
        tracing::debug!("Loading service instance store from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| ActorError::StoreRead {
            path: path.to_path_buf(),
            source,
        })?;
        let document =
            serde_json::from_str(&contents).map_err(|source| ActorError::StoreParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { document })
    }

    fn find(&self, name: &str, space_guid: &str) -> Result<&StoredInstance, ActorError> {
        self.document
            .service_instances
            .iter()
            .find(|s| s.space_guid == space_guid && s.bundle.name == name)
            .ok_or_else(|| ActorError::ServiceInstanceNotFound {
                name: name.to_string(),
            })
    }

    fn respond<T>(&self, result: Result<T, ActorError>) -> Fetched<T> {
        let warnings = self.document.warnings.clone();
        match result {
            Ok(value) => Fetched::ok(value, warnings),
            Err(error) => Fetched::err(error, warnings),
        }
    }
}

impl Actor for JsonStore {
    fn service_instance_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Fetched<ServiceInstance> {
        tracing::debug!(instance = name, space_guid, "Fetching service instance guid");
        self.respond(self.find(name, space_guid).map(|s| ServiceInstance {
            guid: s.bundle.guid.clone(),
        }))
    }

    fn service_instance_parameters(&self, name: &str, space_guid: &str) -> Fetched<Value> {
        tracing::debug!(instance = name, space_guid, "Fetching service instance parameters");
        let result = self.find(name, space_guid).and_then(|s| {
            s.parameters
                .clone()
                .ok_or_else(|| ActorError::ParametersNotSupported {
                    name: name.to_string(),
                })
        });
        self.respond(result)
    }

    fn service_instance_details(
        &self,
        name: &str,
        space_guid: &str,
        include_internal: bool,
    ) -> Fetched<ServiceInstanceBundle> {
        tracing::debug!(
            instance = name,
            space_guid,
            include_internal,
            "Fetching service instance details"
        );
        let result = self.find(name, space_guid).map(|s| {
            let mut bundle = s.bundle.clone();
            bundle.bound_apps = s
                .bound_apps
                .iter()
                .filter(|b| include_internal || !b.internal)
                .map(|b| b.app.clone())
                .collect();
            bundle
        });
        self.respond(result)
    }
}
