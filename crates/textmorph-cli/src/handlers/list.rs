//! List command handler

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::{OutputWriter, StrategyInfo};
use textmorph_core::{TransformFamily, TransformKind};

/// Handle the list command
pub fn handle_list(args: ListArgs, output: &mut OutputWriter) -> Result<()> {
    let family = args.family.map(TransformFamily::from);
    let rows: Vec<StrategyInfo> = TransformKind::ALL
        .into_iter()
        .filter(|kind| family.map_or(true, |f| kind.family() == f))
        .map(StrategyInfo::from)
        .collect();

    output.strategies(&rows)
}
