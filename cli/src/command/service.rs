use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use instlib::{aggregate, render, store::JsonStore, Actor, Config, Mode, ResourceReference, Ui};

#[derive(Debug, Args)]
pub struct Service {
    #[arg(help = "Name of the service instance to show")]
    pub service_instance: String,

    #[arg(
        long,
        help = "Retrieve and display the given service instance's guid. All other output is suppressed."
    )]
    pub guid: bool,

    #[arg(
        long,
        help = "Retrieve and display the given service instance's parameters. All other output is suppressed."
    )]
    pub params: bool,
}

impl Service {
    pub fn run(&self, config: &Config) -> Result<()> {
        config.check_target()?;
        let store = JsonStore::load(&config.store_path()?)?;
        let mut ui = Ui::stdio();
        self.execute(&store, config, &mut ui)?;
        Ok(())
    }

    /// Runs against an already-targeted config.
    pub fn execute<A: Actor, O: Write, E: Write>(
        &self,
        actor: &A,
        config: &Config,
        ui: &mut Ui<O, E>,
    ) -> instlib::Result<()> {
        let reference =
            ResourceReference::new(&self.service_instance, &config.targeted_space().guid);
        let mode = Mode::select(self.guid, self.params);
        tracing::debug!(?mode, instance = %reference.name, "Showing service instance");

        match mode {
            Mode::Guid => display_guid(actor, &reference, ui),
            Mode::Parameters => display_parameters(actor, &reference, ui),
            Mode::Details => display_details(actor, config, &reference, ui),
        }
    }
}

fn display_guid<A: Actor, O: Write, E: Write>(
    actor: &A,
    reference: &ResourceReference,
    ui: &mut Ui<O, E>,
) -> instlib::Result<()> {
    let instance = actor
        .service_instance_by_name_and_space(&reference.name, &reference.space_guid)
        .result?;
    ui.display_text(&instance.guid)?;
    Ok(())
}

fn display_parameters<A: Actor, O: Write, E: Write>(
    actor: &A,
    reference: &ResourceReference,
    ui: &mut Ui<O, E>,
) -> instlib::Result<()> {
    let fetched = actor.service_instance_parameters(&reference.name, &reference.space_guid);
    ui.display_warnings(&fetched.warnings)?;
    let params = fetched.result?;

    let data = serde_json::to_string_pretty(&params).map_err(io::Error::from)?;
    ui.display_text(&data)?;
    Ok(())
}

fn display_details<A: Actor, O: Write, E: Write>(
    actor: &A,
    config: &Config,
    reference: &ResourceReference,
    ui: &mut Ui<O, E>,
) -> instlib::Result<()> {
    let user = config.current_user()?;
    render::render_intro(
        ui,
        &reference.name,
        &config.targeted_organization().name,
        &config.targeted_space().name,
        &user.name,
    )?;

    let detail = aggregate::fetch_details(actor, reference, ui)?;
    render::render_details(ui, &detail)?;
    Ok(())
}
