//! Sections of the `service` details view, in the order they are printed.

use std::io::{self, Write};

use crate::model::{
    join_tags, InstanceBody, ManagedProperties, ServiceInstanceDetail, UpgradeStatus,
    UsageSummaryEntry, UserProvidedProperties,
};
use crate::sharing::{self, SharingNotice};
use crate::ui::{Ui, DEFAULT_TABLE_SPACE_PADDING};

pub const NO_LAST_OPERATION: &str =
    "There is no last operation available for this service instance.";
pub const NO_BOUND_APPS: &str = "There are no bound apps for this service instance.";
pub const NOT_SHARED: &str = "This service instance is not currently being shared.";
pub const SHARING_FEATURE_FLAG_DISABLED: &str = "The \"service_instance_sharing\" feature flag is disabled for this Cloud Foundry platform.";
pub const SHARING_DISABLED_BY_OFFERING: &str =
    "Service instance sharing is disabled for this service offering.";
pub const NO_UPGRADE_AVAILABLE: &str = "There is no upgrade available for this service.";
pub const UPGRADES_NOT_SUPPORTED: &str = "Upgrades are not supported by this broker.";

/// The line printed before anything is fetched.
pub fn render_intro<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    instance_name: &str,
    org_name: &str,
    space_name: &str,
    user_name: &str,
) -> io::Result<()> {
    ui.display_text(&format!(
        "Showing info of service {instance_name} in org {org_name} / space {space_name} as {user_name}..."
    ))?;
    ui.display_newline()
}

/// Everything after the intro. Sharing and upgrade only exist for managed
/// instances.
pub fn render_details<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    detail: &ServiceInstanceDetail,
) -> io::Result<()> {
    match detail.body() {
        InstanceBody::UserProvided(props) => {
            render_user_provided_properties(ui, detail, props)?;
            render_last_operation(ui, detail)?;
            render_bound_apps(ui, detail)?;
        }
        InstanceBody::Managed(props) => {
            render_managed_properties(ui, detail, props)?;
            render_last_operation(ui, detail)?;
            render_bound_apps(ui, detail)?;
            render_sharing(ui, props)?;
            render_upgrade(ui, detail.name(), &props.upgrade)?;
        }
    }
    Ok(())
}

fn render_user_provided_properties<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    detail: &ServiceInstanceDetail,
    props: &UserProvidedProperties,
) -> io::Result<()> {
    let table = [
        ("name:", detail.name().to_string()),
        ("guid:", detail.guid().to_string()),
        ("type:", detail.provisioning_type().to_string()),
        ("tags:", join_tags(&props.tags)),
        (
            "route service url:",
            props.route_service_url.clone().unwrap_or_default(),
        ),
        (
            "syslog drain url:",
            props.syslog_drain_url.clone().unwrap_or_default(),
        ),
    ];
    ui.display_key_value_table(&table, DEFAULT_TABLE_SPACE_PADDING)?;
    ui.display_newline()
}

fn render_managed_properties<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    detail: &ServiceInstanceDetail,
    props: &ManagedProperties,
) -> io::Result<()> {
    let table = [
        ("name:", detail.name().to_string()),
        ("guid:", detail.guid().to_string()),
        ("type:", detail.provisioning_type().to_string()),
        ("broker:", props.broker_name.clone()),
        ("offering:", props.offering_name.clone()),
        ("plan:", props.plan_name.clone()),
        ("tags:", join_tags(&props.tags)),
        ("offering tags:", join_tags(&props.offering_tags)),
        ("description:", props.offering_description.clone()),
        ("documentation:", props.offering_documentation_url.clone()),
        (
            "dashboard url:",
            props.dashboard_url.clone().unwrap_or_default(),
        ),
    ];
    ui.display_key_value_table(&table, DEFAULT_TABLE_SPACE_PADDING)?;
    ui.display_newline()
}

pub fn render_last_operation<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    detail: &ServiceInstanceDetail,
) -> io::Result<()> {
    ui.display_text(&format!(
        "Showing status of last operation from service instance {}...",
        detail.name()
    ))?;

    match detail.last_operation() {
        None => ui.display_text(NO_LAST_OPERATION)?,
        Some(operation) => {
            ui.display_newline()?;
            let table = [
                ("status:", operation.status()),
                ("message:", operation.description.clone()),
                ("started:", operation.created_at.clone()),
                ("updated:", operation.updated_at.clone()),
            ];
            ui.display_key_value_table(&table, DEFAULT_TABLE_SPACE_PADDING)?;
        }
    }

    ui.display_newline()
}

pub fn render_bound_apps<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    detail: &ServiceInstanceDetail,
) -> io::Result<()> {
    ui.display_text("Bound apps:")?;

    if detail.bound_apps().is_empty() {
        ui.display_text(NO_BOUND_APPS)?;
        return ui.display_newline();
    }

    let mut table = vec![vec![
        "name".to_string(),
        "binding name".to_string(),
        "status".to_string(),
        "message".to_string(),
    ]];
    for app in detail.bound_apps() {
        table.push(vec![
            app.app_name.clone(),
            app.binding_name.clone(),
            app.last_operation.status(),
            app.last_operation.description.clone(),
        ]);
    }

    ui.display_table_with_header("   ", table, DEFAULT_TABLE_SPACE_PADDING)?;
    ui.display_newline()
}

pub fn render_sharing<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    props: &ManagedProperties,
) -> io::Result<()> {
    ui.display_text("Sharing:")?;
    ui.display_newline()?;

    for notice in sharing::notices(&props.sharing) {
        match notice {
            SharingNotice::SharedFrom { space, org } => ui.display_text(&format!(
                "This service instance is shared from space {space} of org {org}."
            ))?,
            SharingNotice::SharedTo(usage) => {
                ui.display_text("Shared with spaces:")?;
                render_shared_to(ui, usage)?;
            }
            SharingNotice::NotShared => ui.display_text(NOT_SHARED)?,
            SharingNotice::FeatureFlagDisabled => ui.display_text(SHARING_FEATURE_FLAG_DISABLED)?,
            SharingNotice::OfferingDisablesSharing => {
                ui.display_text(SHARING_DISABLED_BY_OFFERING)?
            }
        }
        ui.display_newline()?;
    }

    Ok(())
}

fn render_shared_to<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    usage: &[UsageSummaryEntry],
) -> io::Result<()> {
    let mut table = vec![vec![
        "org".to_string(),
        "space".to_string(),
        "bindings".to_string(),
    ]];
    for line in usage {
        table.push(vec![
            line.org_name.clone(),
            line.space_name.clone(),
            line.bound_app_count.to_string(),
        ]);
    }
    ui.display_table_with_header("   ", table, DEFAULT_TABLE_SPACE_PADDING)
}

pub fn render_upgrade<O: Write, E: Write>(
    ui: &mut Ui<O, E>,
    instance_name: &str,
    upgrade: &UpgradeStatus,
) -> io::Result<()> {
    ui.display_text("Upgrading:")?;

    match upgrade {
        UpgradeStatus::Available { description } => {
            ui.display_text("Showing available upgrade details for this service...")?;
            ui.display_newline()?;
            ui.display_text(&format!("Upgrade description: {description}"))?;
            ui.display_newline()?;
            ui.display_text(&format!(
                "TIP: You can upgrade using 'cf upgrade-service {instance_name}'"
            ))?;
        }
        UpgradeStatus::NotAvailable => ui.display_text(NO_UPGRADE_AVAILABLE)?,
        UpgradeStatus::NotSupported => ui.display_text(UPGRADES_NOT_SUPPORTED)?,
    }

    ui.display_newline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundApplication, LastOperation, SharingStatus};

    fn managed(props: ManagedProperties) -> ServiceInstanceDetail {
        ServiceInstanceDetail::managed("db", "guid-db", props)
    }

    fn app(name: &str) -> BoundApplication {
        BoundApplication {
            app_name: name.to_string(),
            binding_name: format!("{name}-binding"),
            last_operation: LastOperation {
                operation_type: "create".to_string(),
                state: "succeeded".to_string(),
                description: "done".to_string(),
                ..LastOperation::default()
            },
        }
    }

    fn render(detail: &ServiceInstanceDetail) -> String {
        let mut ui = Ui::buffered();
        render_details(&mut ui, detail).unwrap();
        ui.output()
    }

    /// Lines between the `Bound apps:` header and the blank line that ends it.
    fn bound_apps_lines(output: &str) -> Vec<String> {
        output
            .lines()
            .skip_while(|l| *l != "Bound apps:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_intro() {
        let mut ui = Ui::buffered();
        render_intro(&mut ui, "db", "my-org", "dev", "admin").unwrap();
        assert_eq!(
            ui.output(),
            "Showing info of service db in org my-org / space dev as admin...\n\n"
        );
    }

    #[test]
    fn test_user_provided_has_no_sharing_or_upgrade() {
        let detail = ServiceInstanceDetail::user_provided(
            "logs",
            "guid-logs",
            UserProvidedProperties {
                tags: vec!["a".to_string(), "b".to_string()],
                route_service_url: None,
                syslog_drain_url: Some("syslog://drain".to_string()),
            },
        );
        let output = render(&detail);

        assert!(output.contains("type:"));
        assert!(output.contains("user-provided"));
        assert!(output.contains("a, b"));
        assert!(output.contains("syslog://drain"));
        assert!(output.contains("route service url:\n"));
        assert!(!output.contains("Sharing:"));
        assert!(!output.contains("Upgrading:"));
        assert!(!output.contains("broker:"));
    }

    #[test]
    fn test_managed_section_order() {
        let output = render(&managed(ManagedProperties {
            broker_name: "broker".to_string(),
            offering_name: "postgres".to_string(),
            plan_name: "small".to_string(),
            ..ManagedProperties::default()
        }));

        let positions: Vec<usize> = [
            "name:",
            "Showing status of last operation",
            "Bound apps:",
            "Sharing:",
            "Upgrading:",
        ]
        .iter()
        .map(|marker| output.find(marker).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("postgres"));
        assert!(output.contains(UPGRADES_NOT_SUPPORTED));
    }

    #[test]
    fn test_absent_last_operation() {
        let detail = managed(ManagedProperties::default());
        let mut ui = Ui::buffered();
        render_last_operation(&mut ui, &detail).unwrap();
        assert_eq!(
            ui.output(),
            format!(
                "Showing status of last operation from service instance db...\n{NO_LAST_OPERATION}\n\n"
            )
        );
    }

    #[test]
    fn test_present_last_operation_with_empty_fields() {
        let detail = managed(ManagedProperties::default())
            .with_last_operation(Some(LastOperation::default()));
        let mut ui = Ui::buffered();
        render_last_operation(&mut ui, &detail).unwrap();
        let output = ui.output();
        assert!(!output.contains(NO_LAST_OPERATION));
        assert!(output.contains("status:"));
        assert!(output.contains("updated:"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_last_operation_table() {
        let detail = managed(ManagedProperties::default()).with_last_operation(Some(
            LastOperation {
                operation_type: "update".to_string(),
                state: "in progress".to_string(),
                description: "resizing".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                updated_at: "2024-01-01T00:05:00Z".to_string(),
            },
        ));
        let mut ui = Ui::buffered();
        render_last_operation(&mut ui, &detail).unwrap();
        let output = ui.output();
        assert!(output.contains("update in progress"));
        assert!(output.contains("resizing"));
        assert!(output.contains("2024-01-01T00:00:00Z"));
        assert!(output.contains("2024-01-01T00:05:00Z"));
    }

    #[test]
    fn test_no_bound_apps() {
        let output = render(&managed(ManagedProperties::default()));
        assert_eq!(bound_apps_lines(&output), vec![NO_BOUND_APPS.to_string()]);
    }

    #[test]
    fn test_bound_apps_rows() {
        let detail = managed(ManagedProperties::default())
            .with_bound_apps(vec![app("web"), app("worker"), app("cron")]);
        let lines = bound_apps_lines(&render(&detail));

        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with("name"));
        assert!(lines[0].contains("binding name"));
        assert!(lines[1].contains("web-binding"));
        assert!(lines[1].contains("create succeeded"));
        assert!(lines[3].contains("cron"));
    }

    #[test]
    fn test_shared_from_hides_usage_table() {
        let props = ManagedProperties {
            sharing: SharingStatus {
                is_shared_from_original_space: true,
                is_shared_to_other_spaces: true,
                origin_space_name: "origin".to_string(),
                origin_org_name: "origin-org".to_string(),
                usage_summary: vec![UsageSummaryEntry {
                    org_name: "o2".to_string(),
                    space_name: "s2".to_string(),
                    bound_app_count: 1,
                }],
                ..SharingStatus::default()
            },
            ..ManagedProperties::default()
        };
        let mut ui = Ui::buffered();
        render_sharing(&mut ui, &props).unwrap();
        let output = ui.output();

        assert!(output.contains("This service instance is shared from space origin of org origin-org."));
        assert!(!output.contains("Shared with spaces:"));
        assert!(!output.contains("bindings"));
        assert!(!output.contains("s2"));
    }

    #[test]
    fn test_shared_to_usage_table() {
        let props = ManagedProperties {
            sharing: SharingStatus {
                is_shared_to_other_spaces: true,
                offering_disables_sharing: true,
                usage_summary: vec![
                    UsageSummaryEntry {
                        org_name: "o2".to_string(),
                        space_name: "s2".to_string(),
                        bound_app_count: 12,
                    },
                    UsageSummaryEntry {
                        org_name: "o3".to_string(),
                        space_name: "s3".to_string(),
                        bound_app_count: 0,
                    },
                ],
                ..SharingStatus::default()
            },
            ..ManagedProperties::default()
        };
        let mut ui = Ui::buffered();
        render_sharing(&mut ui, &props).unwrap();
        let output = ui.output();
        let lines: Vec<&str> = output.lines().collect();

        let header = lines.iter().position(|l| *l == "Shared with spaces:").unwrap();
        assert!(lines[header + 1].contains("bindings"));
        assert!(lines[header + 2].contains("s2"));
        assert!(lines[header + 2].trim_end().ends_with("12"));
        assert!(lines[header + 3].trim_end().ends_with('0'));
        assert!(output.contains(SHARING_DISABLED_BY_OFFERING));
        assert!(!output.contains(NOT_SHARED));
    }

    #[test]
    fn test_not_shared_with_both_notices() {
        let props = ManagedProperties {
            sharing: SharingStatus {
                feature_flag_disabled: true,
                offering_disables_sharing: true,
                ..SharingStatus::default()
            },
            ..ManagedProperties::default()
        };
        let mut ui = Ui::buffered();
        render_sharing(&mut ui, &props).unwrap();
        assert_eq!(
            ui.output(),
            format!(
                "Sharing:\n\n{NOT_SHARED}\n\n{SHARING_FEATURE_FLAG_DISABLED}\n\n{SHARING_DISABLED_BY_OFFERING}\n\n"
            )
        );
    }

    #[test]
    fn test_upgrade_available() {
        let mut ui = Ui::buffered();
        render_upgrade(
            &mut ui,
            "db",
            &UpgradeStatus::Available {
                description: "Adds replica support".to_string(),
            },
        )
        .unwrap();
        let output = ui.output();
        assert!(output.contains("Upgrade description: Adds replica support"));
        assert!(output.contains("TIP: You can upgrade using 'cf upgrade-service db'"));
    }

    #[test]
    fn test_upgrade_not_available_and_not_supported() {
        let mut ui = Ui::buffered();
        render_upgrade(&mut ui, "db", &UpgradeStatus::NotAvailable).unwrap();
        assert_eq!(ui.output(), format!("Upgrading:\n{NO_UPGRADE_AVAILABLE}\n\n"));

        let mut ui = Ui::buffered();
        render_upgrade(&mut ui, "db", &UpgradeStatus::NotSupported).unwrap();
        assert_eq!(ui.output(), format!("Upgrading:\n{UPGRADES_NOT_SUPPORTED}\n\n"));
    }
}
