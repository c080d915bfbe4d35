//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::OutputFormat;
use crate::distribution::{DistributionRequest, NonPositivePolicy};
use crate::engine::EngineMode;
use anyhow::Result;
use simplelog::LevelFilter;
use std::str::FromStr;

/// Convert a CLI subcommand to a distribution request
pub fn convert_command(command: cli::Command) -> DistributionRequest {
    match command {
        cli::Command::UniformInt { min, max } => DistributionRequest::UniformInt { min, max },
        cli::Command::UniformReal { min, max } => DistributionRequest::UniformReal { min, max },
        cli::Command::Geometric { p } => DistributionRequest::Geometric { p },
        cli::Command::Exponential { lambda } => DistributionRequest::Exponential { lambda },
        cli::Command::Normal { mean, stddev } => DistributionRequest::Normal { mean, stddev },
        cli::Command::Proactive {
            mean_rate,
            stddev_rate,
        } => DistributionRequest::ProactiveExpNormal {
            mean_rate,
            stddev_rate,
        },
    }
}

/// Convert CLI EngineType to EngineMode
pub fn convert_engine_type(cli_type: cli::EngineType) -> EngineMode {
    match cli_type {
        cli::EngineType::PerCall => EngineMode::PerCall,
        cli::EngineType::ThreadLocal => EngineMode::ThreadLocal,
    }
}

/// Convert CLI NonPositiveMode to NonPositivePolicy
pub fn convert_non_positive(cli_mode: cli::NonPositiveMode) -> NonPositivePolicy {
    match cli_mode {
        cli::NonPositiveMode::Resample => NonPositivePolicy::Resample,
        cli::NonPositiveMode::Reject => NonPositivePolicy::Reject,
    }
}

/// Convert CLI FormatType to OutputFormat
pub fn convert_format(cli_format: cli::FormatType) -> OutputFormat {
    match cli_format {
        cli::FormatType::Text => OutputFormat::Text,
        cli::FormatType::Json => OutputFormat::Json,
        cli::FormatType::Csv => OutputFormat::Csv,
    }
}

/// Parse a log level name (trace, debug, info, warn, error, off)
pub fn parse_log_level(s: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(s.trim()).map_err(|_| anyhow::anyhow!("Invalid log level: {}", s))
}
