//! Mortality calculator
//!
//! Builds a household from the command line and prints its stats as JSON.

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mortality_app::cli::Cli;
use mortality_app::commands::{household, planning, stats};
use mortality_app::state::{AppState, Report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = AppState::new();
    household::initialize(&state, cli.age).map_err(anyhow::Error::msg)?;

    for entry in &cli.parents {
        household::add_parent(&state, entry.age, entry.label.clone()).map_err(anyhow::Error::msg)?;
    }
    for entry in &cli.grandparents {
        household::add_grandparent(&state, entry.age, entry.label.clone())
            .map_err(anyhow::Error::msg)?;
    }
    for entry in &cli.children {
        household::add_child(&state, entry.age, entry.label.clone()).map_err(anyhow::Error::msg)?;
    }
    for entry in &cli.pets {
        household::add_pet(&state, entry.name.clone(), entry.kind.to_string(), entry.age)
            .map_err(anyhow::Error::msg)?;
    }

    let future_child = match cli.future_child_at {
        Some(age) => planning::get_future_child_time(&state, age).map_err(anyhow::Error::msg)?,
        None => None,
    };

    let report = Report {
        revision: stats::get_revision(&state),
        stats: stats::get_snapshot(&state).map_err(anyhow::Error::msg)?,
        time_remaining: planning::get_time_remaining(&state).map_err(anyhow::Error::msg)?,
        quality_time: planning::get_quality_time(&state).map_err(anyhow::Error::msg)?,
        future_child,
    };
    info!(
        people = report.stats.people.len(),
        pets = report.stats.pets.len(),
        "report ready"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
