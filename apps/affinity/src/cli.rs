//! # CLI Module
//!
//! clap-based command interface for Affinity.
//!
//! Commands:
//! - `classify <LEVEL>`: classify one level
//! - `batch [FILE]`: classify one level per line from a file or stdin
//! - `bands`: show the level interval mapped to each state
//! - `serve`: run the HTTP API
//!
//! Each `cmd_*` function returns the rendered output instead of printing it,
//! so the same code path serves both the binary and the tests.

use crate::api;
use affinity_core::{
    AffinityError, DEFAULT_MILD, DEFAULT_STRONG, EmotionalLevel, EvaluationReport, Love,
    Rejection, Thresholds,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] AffinityError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bind address {0:?}")]
    Address(String),
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Affinity: classify emotional levels into emotional states.
#[derive(Debug, Parser)]
#[command(name = "affinity", version)]
pub struct Cli {
    /// Magnitude separating NONE from LIKE / DISLIKE.
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_MILD)]
    pub mild: f32,

    /// Magnitude separating LIKE / DISLIKE from LOVE / HATE.
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_STRONG)]
    pub strong: f32,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a single level.
    Classify {
        /// The emotional level, conventionally in [-1.0, 1.0].
        #[arg(allow_hyphen_values = true)]
        level: String,

        /// Classify NaN and infinities instead of rejecting them.
        #[arg(long)]
        allow_non_finite: bool,
    },

    /// Classify one level per line. Reads stdin when no file is given.
    Batch {
        file: Option<PathBuf>,

        /// Classify NaN and infinities instead of rejecting them.
        #[arg(long)]
        allow_non_finite: bool,
    },

    /// Show the interval of levels mapped to each state.
    Bands,

    /// Run the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    /// Validated thresholds from `--mild` / `--strong`.
    pub fn thresholds(&self) -> Result<Thresholds, CliError> {
        Ok(Thresholds::new(self.mild, self.strong)?)
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the parsed command, printing its output to stdout.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let thresholds = cli.thresholds()?;
    let love = Love::with_thresholds(thresholds);
    debug!(
        mild = thresholds.mild(),
        strong = thresholds.strong(),
        "thresholds configured"
    );

    let output = match cli.command {
        Commands::Classify {
            ref level,
            allow_non_finite,
        } => cmd_classify(&love, level, cli.json, allow_non_finite)?,
        Commands::Batch {
            ref file,
            allow_non_finite,
        } => cmd_batch(&love, file.as_deref(), cli.json, allow_non_finite)?,
        Commands::Bands => cmd_bands(&thresholds, cli.json)?,
        Commands::Serve { ref host, port } => {
            let addr = parse_addr(host, port)?;
            api::serve(addr, love).await?;
            return Ok(());
        }
    };

    print!("{output}");
    Ok(())
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, CliError> {
    format!("{host}:{port}")
        .parse()
        .map_err(|_| CliError::Address(host.to_string()))
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Classify one level given as text.
pub fn cmd_classify(
    love: &Love,
    input: &str,
    json: bool,
    allow_non_finite: bool,
) -> Result<String, CliError> {
    let level: EmotionalLevel = input.parse()?;
    let evaluation = if allow_non_finite {
        love.evaluation(level.value())
    } else {
        love.try_evaluation(level.value())?
    };
    debug!(level = evaluation.level, state = %evaluation.state, "classified");

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&evaluation)?))
    } else {
        Ok(format!("{}\n", evaluation.state))
    }
}

/// Classify every level in `file`, or stdin when `file` is `None`.
pub fn cmd_batch(
    love: &Love,
    file: Option<&Path>,
    json: bool,
    allow_non_finite: bool,
) -> Result<String, CliError> {
    let report = match file {
        Some(path) => {
            debug!(path = %path.display(), "reading levels from file");
            evaluate_lines(love, BufReader::new(File::open(path)?), allow_non_finite)?
        }
        None => evaluate_lines(love, io::stdin().lock(), allow_non_finite)?,
    };

    info!(
        evaluated = report.evaluations.len(),
        rejected = report.rejections.len(),
        "batch complete"
    );

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    } else {
        Ok(report.to_text())
    }
}

/// Classify one level per line.
///
/// Blank lines and lines starting with `#` are skipped. Lines that are not
/// valid UTF-8, fail to parse, or hold non-finite levels in strict mode
/// become rejections. Only read failures abort the batch.
pub fn evaluate_lines<R: BufRead>(
    love: &Love,
    reader: R,
    allow_non_finite: bool,
) -> Result<EvaluationReport, CliError> {
    let mut report = EvaluationReport::new();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(e) => {
                let input = String::from_utf8_lossy(&raw);
                let input = input.trim();
                warn!(line = index + 1, input, error = %e, "rejected input");
                report.add_rejection(Rejection::new(input, "line is not valid UTF-8"));
                continue;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let outcome = trimmed.parse::<EmotionalLevel>().and_then(|level| {
            if allow_non_finite {
                Ok(love.evaluation(level.value()))
            } else {
                love.try_evaluation(level.value())
            }
        });

        match outcome {
            Ok(evaluation) => report.add_evaluation(evaluation),
            Err(e) => {
                warn!(line = index + 1, input = trimmed, error = %e, "rejected input");
                report.add_rejection(Rejection::new(trimmed, e.to_string()));
            }
        }
    }

    Ok(report)
}

/// Render the band table for `thresholds`.
pub fn cmd_bands(thresholds: &Thresholds, json: bool) -> Result<String, CliError> {
    let bands = thresholds.bands();

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&bands)?));
    }

    let mut output = String::new();
    for band in &bands {
        output.push_str(&format!("{:<8} {}\n", band.state.as_str(), band.interval()));
    }
    Ok(output)
}

// =============================================================================
// TESTS
// =============================================================================
