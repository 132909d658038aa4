use anyhow::Context;
use clap::Parser;
use shiftga::config::ConfigManager;
use shiftga::engines::generation::{EvolutionEngine, LogProgressCallback};
use shiftga::engines::metrics::ScheduleReport;
use std::path::PathBuf;

/// Evolve a shift roster and print the best schedule found
#[derive(Parser, Debug)]
#[command(name = "shiftga", version)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    config: Option<PathBuf>,

    /// Write the per-generation statistics to this JSON file
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut manager = ConfigManager::new();
    if let Some(path) = &cli.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
    } else {
        log::info!("No configuration file given, using built-in defaults");
    }
    let config = manager.into_inner();

    let model = config.problem.build_model()?;
    let mut engine = EvolutionEngine::new(config.evolution, model)?;
    let outcome = engine.run(LogProgressCallback::default())?;

    println!("-- Best Fitness = {}", outcome.best.fitness().unwrap_or(f64::NAN));
    println!();
    let report = ScheduleReport::build(engine.evaluator(), outcome.best.genome())?;
    println!("{}", report);

    if let Some(path) = cli.history {
        let json = serde_json::to_string_pretty(&outcome.history)?;
        std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote {} statistics records to {}", outcome.history.len(), path.display());
    }

    Ok(())
}
