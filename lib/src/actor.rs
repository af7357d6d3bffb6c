use serde_json::Value;

use crate::error::ActorError;
use crate::model::{ServiceInstance, ServiceInstanceBundle};

/// Result of one retrieval call.
///
/// Warnings travel next to the result instead of inside it: a failed call can
/// still carry advisories that must be shown before the error.
#[derive(Debug)]
pub struct Fetched<T> {
    pub warnings: Vec<String>,
    pub result: Result<T, ActorError>,
}

impl<T> Fetched<T> {
    pub fn ok(value: T, warnings: Vec<String>) -> Self {
        Self {
            warnings,
            result: Ok(value),
        }
    }

    pub fn err(error: ActorError, warnings: Vec<String>) -> Self {
        Self {
            warnings,
            result: Err(error),
        }
    }
}

/// Retrieval queries the service command is built on.
pub trait Actor {
    fn service_instance_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Fetched<ServiceInstance>;

    fn service_instance_parameters(&self, name: &str, space_guid: &str) -> Fetched<Value>;

    fn service_instance_details(
        &self,
        name: &str,
        space_guid: &str,
        include_internal: bool,
    ) -> Fetched<ServiceInstanceBundle>;
}
