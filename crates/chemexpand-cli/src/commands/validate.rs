use super::{open_input, reporter_for};
use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use chemexpand::workflows;

pub fn run(args: &ValidateArgs, progress: &CliProgressHandler) -> Result<()> {
    println!("Verify balanced parentheses in {}", args.input.display());

    let reader = open_input(&args.input)?;
    let reporter = reporter_for(&args.input, progress)?;
    let report = workflows::validate::run(reader, &reporter)?;

    if report.is_all_balanced() {
        println!("Parentheses are balanced for all chemical formulas");
        return Ok(());
    }

    for line in report.invalid_lines() {
        println!("Parentheses NOT balanced in line: {}", line);
    }
    Err(CliError::Unbalanced {
        count: report.invalid_count(),
    })
}
