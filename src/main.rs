use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use tinyecs::{scenario::ScenarioLoader, zoo, Scenario};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "tinyecs zoo demo")]
struct Cli {
    /// Path to a scenario YAML file (built-in zoo when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output format for the registry dumps
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level, overrides the scenario's logging.level
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::zoo(),
    };

    let level = match cli.log_level {
        Some(level) => level,
        None => scenario.config.logging.level_filter()?,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let (mut registry, entities) = scenario.build_registry();

    println!("----- ECS debug output -----");
    for line in zoo::abilities(&registry) {
        println!("{line}");
    }

    let summaries = registry.list_all();
    let last = entities.last().copied().unwrap_or_default();
    let report = registry.list_components_of(last);
    match cli.format {
        Format::Text => {
            println!("Debug info on all registry entries:");
            for summary in &summaries {
                println!("{summary}");
            }
            println!("{report}");
        }
        Format::Json => {
            let dump = serde_json::json!({
                "scenario": scenario.name,
                "containers": summaries,
                "entity": report,
            });
            let text = serde_json::to_string_pretty(&dump).context("Failed to render dump")?;
            println!("{text}");
        }
    }

    registry.clear_all();
    log::info!(
        "cleared {} containers after {} entities",
        registry.container_count(),
        registry.entities().issued()
    );
    Ok(())
}
