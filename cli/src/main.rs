use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use instlib::Config;

mod command;

#[derive(Parser)]
#[command(name = "instview")]
#[command(about = "A CLI tool for inspecting service instances in the targeted space")]
#[command(version)]
struct Cli {
    /// Log retrieval and mode decisions to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Config file to read instead of ~/.instview/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show service instance info")]
    Service(command::Service),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Service(service_cmd) => service_cmd.run(&config)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
