//! Check command handler

use super::utils::{parse_strategy, read_input};
use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::output::{CheckReport, OutputWriter};
use tracing::debug;

/// Handle the check command
///
/// Runs only the strategy's validation; nothing is transformed and the chat
/// model is never contacted.
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let kind = parse_strategy(&args.strategy)?;
    let input = read_input(args.input)?;

    let accepted = kind.accepts(&input);
    debug!(strategy = kind.name(), accepted, "validation checked");

    let report = CheckReport {
        strategy: kind.name().to_string(),
        accepted,
        input_chars: input.chars().count(),
    };
    output.check_report(&report)?;

    if accepted {
        Ok(())
    } else {
        Err(Error::InputRejected {
            strategy: report.strategy,
        })
    }
}
