//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), the report types the
//! commands emit, and the progress spinner.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use textmorph_core::{TransformFamily, TransformKind};
use tracing::trace;

/// Result of `apply`
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    pub strategy: String,
    pub input: String,
    pub output: String,
    /// Seed of the random source, replays the same output with `--seed`
    pub seed: u64,
    pub duration_ms: u64,
    /// RFC 3339, UTC
    pub timestamp: String,
}

/// Result of `check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub strategy: String,
    pub accepted: bool,
    pub input_chars: usize,
}

/// One row of `list`
#[derive(Debug, Clone, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub family: TransformFamily,
    pub randomized: bool,
    pub requires_llm: bool,
    pub description: &'static str,
}

impl From<TransformKind> for StrategyInfo {
    fn from(kind: TransformKind) -> Self {
        Self {
            name: kind.name(),
            family: kind.family(),
            randomized: kind.is_randomized(),
            requires_llm: kind.requires_llm(),
            description: kind.description(),
        }
    }
}

/// Trait for formatting serializable values in the machine formats
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output has dedicated renderers; this is the fallback
            OutputFormat::Human => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Output writer that handles different output formats and colors
///
/// Results go to `writer` (stdout); warnings go to stderr so piped results
/// stay clean.
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, show_progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: show_progress && !quiet,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color: false,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning to stderr
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let line = if self.use_color {
            message.yellow().to_string()
        } else {
            format!("WARNING: {}", message)
        };
        writeln!(io::stderr(), "{}", line)?;
        Ok(())
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        // Create a redacted copy of the value for logging
        let mut value_json = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value_json);
        trace!(
            "Outputting data: {}",
            serde_json::to_string(&value_json).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;
        self.writeln(formatted.trim_end())
    }

    /// Write the result of `apply`; human format prints only the output text
    pub fn apply_report(&mut self, report: &ApplyReport) -> Result<()> {
        match self.format {
            OutputFormat::Human => self.writeln(&report.output),
            _ => self.data(report),
        }
    }

    /// Write the result of `check`
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                let line = format_check_report_human(report);
                if !self.use_color {
                    self.writeln(&line)
                } else if report.accepted {
                    self.writeln(&line.green().to_string())
                } else {
                    self.writeln(&line.red().to_string())
                }
            }
            _ => self.data(report),
        }
    }

    /// Write the strategy listing
    pub fn strategies(&mut self, rows: &[StrategyInfo]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                let table = rows
                    .iter()
                    .map(|row| {
                        vec![
                            row.name.to_string(),
                            row.family.to_string(),
                            yes_no(row.randomized).to_string(),
                            yes_no(row.requires_llm).to_string(),
                            row.description.to_string(),
                        ]
                    })
                    .collect::<Vec<_>>();
                self.table(&["NAME", "FAMILY", "RANDOM", "LLM", "DESCRIPTION"], table)
            }
            _ => self.data(&rows),
        }
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        let rendered = render_table(headers, &rows);
        let mut lines = rendered.lines();

        if let Some(header) = lines.next() {
            if self.use_color {
                self.writeln(&header.bold().to_string())?;
            } else {
                self.writeln(header)?;
            }
        }
        for line in lines {
            self.writeln(line)?;
        }

        Ok(())
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// One line describing a check result
fn format_check_report_human(report: &CheckReport) -> String {
    if report.accepted {
        format!("✓ '{}' accepts the input", report.strategy)
    } else {
        format!("✗ '{}' rejects the input", report.strategy)
    }
}

/// Render rows as an aligned table, widths counted in characters
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    output.push_str(&render_row(headers.iter().copied(), &widths));
    output.push('\n');

    let separator = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    output.push_str(&separator);
    output.push('\n');

    for row in rows {
        output.push_str(&render_row(row.iter().map(String::as_str), &widths));
        output.push('\n');
    }

    output
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(width) => format!("{:width$}", cell, width = width),
            None => cell.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" │ ")
        .trim_end()
        .to_string()
}
