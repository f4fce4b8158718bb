use super::{create_output, open_input, print_rejections, reporter_for};
use crate::cli::ExpandArgs;
use crate::config::{CommandOverrides, ConfigSources, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use chemexpand::workflows;
use tracing::info;

pub fn run(
    args: &ExpandArgs,
    sources: &ConfigSources,
    progress: &CliProgressHandler,
) -> Result<()> {
    let app = build_config(sources, &CommandOverrides::from(args))?;

    println!(
        "Compute extended version of formulas in {}",
        args.input.display()
    );
    println!("Writing formulas to {}", args.output.display());

    let reader = open_input(&args.input)?;
    let mut writer = create_output(&args.output)?;
    let reporter = reporter_for(&args.input, progress)?;

    let summary = workflows::expand::run(reader, &mut writer, &app.run, &reporter)?;
    info!(
        "Wrote {} expansions to {:?}.",
        summary.lines_ok, args.output
    );
    print_rejections(&summary);
    Ok(())
}
