use serde::Deserialize;
use std::fmt;

/// Name of a service instance plus the GUID of the space that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub name: String,
    pub space_guid: String,
}

impl ResourceReference {
    pub fn new(name: impl Into<String>, space_guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_guid: space_guid.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvisioningType {
    UserProvided,
    Managed,
}

impl fmt::Display for ProvisioningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisioningType::UserProvided => f.write_str("user-provided"),
            ProvisioningType::Managed => f.write_str("managed"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LastOperation {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub state: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl LastOperation {
    /// `"{type} {state}"`, the way status columns show an operation.
    pub fn status(&self) -> String {
        format!("{} {}", self.operation_type, self.state)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsageSummaryEntry {
    pub org_name: String,
    pub space_name: String,
    pub bound_app_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SharingStatus {
    pub is_shared_from_original_space: bool,
    pub is_shared_to_other_spaces: bool,
    pub feature_flag_disabled: bool,
    pub offering_disables_sharing: bool,
    pub origin_space_name: String,
    pub origin_org_name: String,
    pub usage_summary: Vec<UsageSummaryEntry>,
}

/// Whether the broker advertises a newer version of the instance's plan.
///
/// `NotSupported` is the broker not reporting upgrades at all, which is
/// different from reporting that none is available right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UpgradeStatus {
    Available { description: String },
    NotAvailable,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoundApplication {
    pub app_name: String,
    pub binding_name: String,
    pub last_operation: LastOperation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProvidedProperties {
    pub tags: Vec<String>,
    pub route_service_url: Option<String>,
    pub syslog_drain_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedProperties {
    pub broker_name: String,
    pub offering_name: String,
    pub offering_tags: Vec<String>,
    pub offering_description: String,
    pub offering_documentation_url: String,
    pub plan_name: String,
    pub tags: Vec<String>,
    pub dashboard_url: Option<String>,
    pub sharing: SharingStatus,
    pub upgrade: UpgradeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceBody {
    UserProvided(UserProvidedProperties),
    Managed(ManagedProperties),
}

/// Everything the details view shows about one service instance.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstanceDetail {
    name: String,
    guid: String,
    body: InstanceBody,
    last_operation: Option<LastOperation>,
    bound_apps: Vec<BoundApplication>,
}

impl ServiceInstanceDetail {
    pub fn user_provided(
        name: impl Into<String>,
        guid: impl Into<String>,
        properties: UserProvidedProperties,
    ) -> Self {
        Self::new(name, guid, InstanceBody::UserProvided(properties))
    }

    pub fn managed(
        name: impl Into<String>,
        guid: impl Into<String>,
        properties: ManagedProperties,
    ) -> Self {
        Self::new(name, guid, InstanceBody::Managed(properties))
    }

    fn new(name: impl Into<String>, guid: impl Into<String>, body: InstanceBody) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            body,
            last_operation: None,
            bound_apps: Vec::new(),
        }
    }

    pub fn with_last_operation(mut self, last_operation: Option<LastOperation>) -> Self {
        self.last_operation = last_operation;
        self
    }

    pub fn with_bound_apps(mut self, bound_apps: Vec<BoundApplication>) -> Self {
        self.bound_apps = bound_apps;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn body(&self) -> &InstanceBody {
        &self.body
    }

    pub fn provisioning_type(&self) -> ProvisioningType {
        match self.body {
            InstanceBody::UserProvided(_) => ProvisioningType::UserProvided,
            InstanceBody::Managed(_) => ProvisioningType::Managed,
        }
    }

    pub fn last_operation(&self) -> Option<&LastOperation> {
        self.last_operation.as_ref()
    }

    pub fn bound_apps(&self) -> &[BoundApplication] {
        &self.bound_apps
    }
}

/// Minimal identity returned by the by-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub guid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfferingBundle {
    pub name: String,
    pub tags: Vec<String>,
    pub description: String,
    pub documentation_url: String,
}

/// Flat record as handed over by retrieval.
///
/// Fields that only make sense for one provisioning type may still be filled
/// in; the aggregator decides which of them reach the view model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInstanceBundle {
    pub guid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provisioning_type: ProvisioningType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub route_service_url: Option<String>,
    #[serde(default)]
    pub syslog_drain_url: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub broker_name: String,
    #[serde(default)]
    pub offering: OfferingBundle,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub last_operation: Option<LastOperation>,
    #[serde(default)]
    pub shared_status: SharingStatus,
    #[serde(default)]
    pub upgrade_status: UpgradeStatus,
    #[serde(default)]
    pub bound_apps: Vec<BoundApplication>,
}

/// Joins tags the way the properties table prints them.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
