use super::{create_output, open_input, print_rejections, reporter_for};
use crate::cli::ProtonsArgs;
use crate::config::{CommandOverrides, ConfigSources, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use chemexpand::core::periodic::PeriodicTable;
use chemexpand::engine::config::UnknownSymbolPolicy;
use chemexpand::engine::error::EngineError;
use chemexpand::workflows::{self, BatchSummary};
use tracing::info;

pub fn run(
    args: &ProtonsArgs,
    sources: &ConfigSources,
    progress: &CliProgressHandler,
) -> Result<()> {
    let app = build_config(sources, &CommandOverrides::from(args))?;

    let table = match &app.periodic_table {
        Some(path) => {
            info!("Using periodic table from {:?}.", path);
            PeriodicTable::load(path).map_err(EngineError::from)?
        }
        None => {
            info!("Using the built-in periodic table.");
            PeriodicTable::builtin()
        }
    };

    println!(
        "Compute total proton number of formulas in {}",
        args.input.display()
    );
    println!("Writing formula to {}", args.output.display());

    let reader = open_input(&args.input)?;
    let mut writer = create_output(&args.output)?;
    let reporter = reporter_for(&args.input, progress)?;

    let summary = workflows::protons::run(reader, &mut writer, &table, &app.run, &reporter)?;
    print_rejections(&summary);
    if app.run.unknown_symbols == UnknownSymbolPolicy::Warn {
        print_unknown_symbols(&summary);
    }
    Ok(())
}

fn print_unknown_symbols(summary: &BatchSummary) {
    if summary.unknown_symbols.is_empty() {
        return;
    }
    let listed: Vec<String> = summary
        .unknown_symbols
        .iter()
        .map(|(symbol, count)| format!("{} (x{})", symbol, count))
        .collect();
    println!(
        "⚠ Unknown element symbols counted as 0 protons: {}",
        listed.join(", ")
    );
}
