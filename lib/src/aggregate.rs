use std::io::Write;

use crate::actor::Actor;
use crate::error::Result;
use crate::model::{
    ManagedProperties, ProvisioningType, ResourceReference, ServiceInstanceBundle,
    ServiceInstanceDetail, UserProvidedProperties,
};
use crate::ui::Ui;

/// Fetches the full record for `reference` and turns it into the view model.
///
/// Warnings returned by the fetch are written before its error, if any, is
/// propagated.
pub fn fetch_details<A: Actor, O: Write, E: Write>(
    actor: &A,
    reference: &ResourceReference,
    ui: &mut Ui<O, E>,
) -> Result<ServiceInstanceDetail> {
    let fetched = actor.service_instance_details(&reference.name, &reference.space_guid, false);
    ui.display_warnings(&fetched.warnings)?;
    let bundle = fetched.result?;
    tracing::debug!(
        instance = %bundle.name,
        provisioning_type = %bundle.provisioning_type,
        "Fetched service instance details"
    );
    Ok(ServiceInstanceDetail::from(bundle))
}

impl From<ServiceInstanceBundle> for ServiceInstanceDetail {
    fn from(bundle: ServiceInstanceBundle) -> Self {
        let detail = match bundle.provisioning_type {
            ProvisioningType::UserProvided => ServiceInstanceDetail::user_provided(
                bundle.name,
                bundle.guid,
                UserProvidedProperties {
                    tags: bundle.tags,
                    route_service_url: bundle.route_service_url,
                    syslog_drain_url: bundle.syslog_drain_url,
                },
            ),
            ProvisioningType::Managed => ServiceInstanceDetail::managed(
                bundle.name,
                bundle.guid,
                ManagedProperties {
                    broker_name: bundle.broker_name,
                    offering_name: bundle.offering.name,
                    offering_tags: bundle.offering.tags,
                    offering_description: bundle.offering.description,
                    offering_documentation_url: bundle.offering.documentation_url,
                    plan_name: bundle.plan_name,
                    tags: bundle.tags,
                    dashboard_url: bundle.dashboard_url,
                    sharing: bundle.shared_status,
                    upgrade: bundle.upgrade_status,
                },
            ),
        };

        detail
            .with_last_operation(bundle.last_operation)
            .with_bound_apps(bundle.bound_apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Fetched;
    use crate::error::{ActorError, Error};
    use crate::model::{
        InstanceBody, LastOperation, OfferingBundle, ServiceInstance, SharingStatus,
        UpgradeStatus,
    };
    use serde_json::Value;

    fn bundle(provisioning_type: ProvisioningType) -> ServiceInstanceBundle {
        ServiceInstanceBundle {
            guid: "guid-1".to_string(),
            name: "db".to_string(),
            provisioning_type,
            tags: vec!["sql".to_string()],
            route_service_url: Some("https://route.example.com".to_string()),
            syslog_drain_url: None,
            dashboard_url: Some("https://dashboard.example.com".to_string()),
            broker_name: "broker".to_string(),
            offering: OfferingBundle {
                name: "postgres".to_string(),
                tags: vec!["relational".to_string()],
                description: "A database".to_string(),
                documentation_url: "https://docs.example.com".to_string(),
            },
            plan_name: "small".to_string(),
            last_operation: Some(LastOperation {
                operation_type: "create".to_string(),
                state: "succeeded".to_string(),
                ..LastOperation::default()
            }),
            shared_status: SharingStatus {
                is_shared_to_other_spaces: true,
                ..SharingStatus::default()
            },
            upgrade_status: UpgradeStatus::NotAvailable,
            bound_apps: Vec::new(),
        }
    }

    struct DetailsActor {
        warnings: Vec<String>,
        fail: bool,
    }

    impl Actor for DetailsActor {
        fn service_instance_by_name_and_space(&self, _: &str, _: &str) -> Fetched<ServiceInstance> {
            unreachable!()
        }

        fn service_instance_parameters(&self, _: &str, _: &str) -> Fetched<Value> {
            unreachable!()
        }

        fn service_instance_details(
            &self,
            name: &str,
            _: &str,
            include_internal: bool,
        ) -> Fetched<ServiceInstanceBundle> {
            assert!(!include_internal);
            if self.fail {
                Fetched::err(
                    ActorError::ServiceInstanceNotFound {
                        name: name.to_string(),
                    },
                    self.warnings.clone(),
                )
            } else {
                Fetched::ok(bundle(ProvisioningType::Managed), self.warnings.clone())
            }
        }
    }

    #[test]
    fn test_user_provided_drops_managed_fields() {
        let detail = ServiceInstanceDetail::from(bundle(ProvisioningType::UserProvided));
        assert_eq!(detail.provisioning_type(), ProvisioningType::UserProvided);
        match detail.body() {
            InstanceBody::UserProvided(props) => {
                assert_eq!(props.tags, vec!["sql".to_string()]);
                assert_eq!(
                    props.route_service_url.as_deref(),
                    Some("https://route.example.com")
                );
                assert!(props.syslog_drain_url.is_none());
            }
            InstanceBody::Managed(_) => panic!("expected user-provided body"),
        }
    }

    #[test]
    fn test_managed_passes_sub_states_through() {
        let detail = ServiceInstanceDetail::from(bundle(ProvisioningType::Managed));
        match detail.body() {
            InstanceBody::Managed(props) => {
                assert_eq!(props.offering_name, "postgres");
                assert_eq!(props.offering_tags, vec!["relational".to_string()]);
                assert!(props.sharing.is_shared_to_other_spaces);
                assert_eq!(props.upgrade, UpgradeStatus::NotAvailable);
            }
            InstanceBody::UserProvided(_) => panic!("expected managed body"),
        }
        assert_eq!(detail.last_operation().unwrap().status(), "create succeeded");
    }

    #[test]
    fn test_fetch_details_forwards_warnings() {
        let actor = DetailsActor {
            warnings: vec!["W1".to_string()],
            fail: false,
        };
        let mut ui = Ui::buffered();
        let detail = fetch_details(&actor, &ResourceReference::new("db", "space"), &mut ui).unwrap();
        assert_eq!(detail.name(), "db");
        assert_eq!(ui.errors(), "W1\n");
        assert_eq!(ui.output(), "");
    }

    #[test]
    fn test_fetch_details_warns_before_failing() {
        let actor = DetailsActor {
            warnings: vec!["W1".to_string()],
            fail: true,
        };
        let mut ui = Ui::buffered();
        let result = fetch_details(&actor, &ResourceReference::new("db", "space"), &mut ui);
        assert!(matches!(
            result,
            Err(Error::Actor(ActorError::ServiceInstanceNotFound { .. }))
        ));
        assert_eq!(ui.errors(), "W1\n");
    }
}
