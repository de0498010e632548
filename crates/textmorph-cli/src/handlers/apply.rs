//! Apply command handler

use super::utils::{build_chat_client, parse_strategy, read_input};
use crate::cli::{ApplyArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{ApplyReport, OutputFormatter, OutputWriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use textmorph_core::{apply, build_transform, ERROR_SENTINEL};
use tracing::{debug, info, instrument};

/// Handle the apply command
#[instrument(skip_all, fields(strategy = %args.strategy))]
pub fn handle_apply(args: ApplyArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let kind = parse_strategy(&args.strategy)?;
    let input = read_input(args.input)?;

    let client = if kind.requires_llm() {
        Some(build_chat_client(config)?)
    } else {
        None
    };
    let strategy = build_transform(kind, client)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(seed, "random source seeded");

    let timer = Timer::with_details("apply", kind.name());
    let spinner = if kind.requires_llm() {
        output.spinner("Waiting for the chat model...")
    } else {
        None
    };

    let result = apply(strategy.as_ref(), &input, &mut rng);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let duration = timer.elapsed();
    drop(timer);

    let transformed = result?;
    if transformed == ERROR_SENTINEL {
        output.warning("The chat model request failed; the output is the error sentinel")?;
    }

    let report = ApplyReport {
        strategy: kind.name().to_string(),
        input,
        output: transformed,
        seed,
        duration_ms: duration.as_millis() as u64,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    info!(
        output_chars = report.output.chars().count(),
        duration_ms = report.duration_ms,
        "transformation completed"
    );

    output.apply_report(&report)?;

    if let Some(path) = args.save_to {
        let content = match output.format() {
            OutputFormat::Human => format!("{}\n", report.output),
            format => format.format(&report)?,
        };
        fs::write(&path, content)?;
        output.success(&format!("✓ Output saved to {}", path.display()))?;
    }

    Ok(())
}
