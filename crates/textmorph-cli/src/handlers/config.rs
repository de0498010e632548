//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigInitArgs, ConfigShowArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::redaction;
use crate::output::OutputWriter;
use serde::Serialize;
use std::path::PathBuf;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Path => handle_config_path(config, output),
    }
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match &config.source {
        Some(path) => output.info(&format!("Loaded from {}", path.display()))?,
        None => output.info("No configuration file found, showing defaults")?,
    }

    let mut value = serde_json::to_value(config)?;
    if !args.show_secrets {
        redaction::redact_json_value(&mut value);
    }

    output.data(&value)
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match (args.path, args.user) {
        (Some(path), _) => path,
        (None, true) => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
        (None, false) => PathBuf::from(".textmorph.yaml"),
    };

    if path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists; use --force to overwrite it",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Set llm.api_key there or export TEXTMORPH_LLM_API_KEY to use acrostic-poem")?;

    Ok(())
}

#[derive(Serialize)]
struct SearchPath {
    path: PathBuf,
    exists: bool,
}

#[derive(Serialize)]
struct ConfigLocations {
    active: Option<PathBuf>,
    search_paths: Vec<SearchPath>,
}

/// Handle config path subcommand
fn handle_config_path(config: &Config, output: &mut OutputWriter) -> Result<()> {
    let locations = ConfigLocations {
        active: config.source.clone(),
        search_paths: Config::default_config_paths()
            .into_iter()
            .map(|path| SearchPath {
                exists: path.exists(),
                path,
            })
            .collect(),
    };

    if output.format() != OutputFormat::Human {
        return output.data(&locations);
    }

    match &locations.active {
        Some(path) => output.writeln(&format!("Active: {}", path.display()))?,
        None => output.writeln("Active: none (defaults and environment)")?,
    }
    output.writeln("Search order:")?;
    for entry in &locations.search_paths {
        let marker = if entry.exists { "✓" } else { "✗" };
        output.writeln(&format!("  {} {}", marker, entry.path.display()))?;
    }

    Ok(())
}
