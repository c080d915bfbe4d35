//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pseudo-rand - draw samples from random distributions
#[derive(Parser, Debug)]
#[command(name = "pseudo-rand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Distribution to sample (may instead come from --config)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // === Run Options ===
    /// Number of samples to draw
    #[arg(short = 'n', long, global = true)]
    pub count: Option<usize>,

    /// Seed for reproducible output (entropy-seeded when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 't', long, global = true)]
    pub threads: Option<usize>,

    // === Sampler Options ===
    /// How each draw obtains its random engine
    #[arg(long, global = true, value_enum)]
    pub engine: Option<EngineType>,

    /// Proactive sampler handling of non-positive normal draws
    #[arg(long, global = true, value_enum)]
    pub non_positive: Option<NonPositiveMode>,

    /// Proactive sampler attempt bound when resampling
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    // === Output Options ===
    /// Output format
    #[arg(short = 'f', long, global = true, value_enum)]
    pub format: Option<FormatType>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Include summary statistics (count, min, max, mean, stddev)
    #[arg(long, global = true)]
    pub summary: bool,

    /// Validate configuration and exit without sampling
    #[arg(long, global = true)]
    pub dry_run: bool,

    // === Logging Options ===
    /// Can be trace, debug, info, warn, error, or off
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL", env = "PSEUDO_RAND_LOG")]
    pub log_level: String,

    /// Log to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Distribution subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Integer uniform on [MIN, MAX]
    #[command(name = "uniform-int", visible_alias = "uni-int")]
    UniformInt {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Real uniform on [MIN, MAX)
    #[command(name = "uniform-real", visible_alias = "uni-real")]
    UniformReal {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Failures before first success, success probability P in (0, 1]
    #[command(visible_alias = "geo")]
    Geometric {
        #[arg(allow_negative_numbers = true)]
        p: f64,
    },

    /// Exponential with rate LAMBDA > 0
    #[command(visible_alias = "exp")]
    Exponential {
        #[arg(allow_negative_numbers = true)]
        lambda: f64,
    },

    /// Normal with MEAN and STDDEV >= 0
    #[command(visible_alias = "norm")]
    Normal {
        #[arg(allow_negative_numbers = true)]
        mean: f64,
        #[arg(allow_negative_numbers = true)]
        stddev: f64,
    },

    /// Proactive exponential-normal with MEAN_RATE > 0 and STDDEV_RATE > 0
    #[command(name = "proactive", visible_alias = "pnorm")]
    Proactive {
        #[arg(allow_negative_numbers = true)]
        mean_rate: f64,
        #[arg(allow_negative_numbers = true)]
        stddev_rate: f64,
    },
}

/// Engine acquisition mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineType {
    /// Fresh entropy-seeded engine per draw
    PerCall,
    /// One engine per worker thread
    ThreadLocal,
}

/// Non-positive inner draw handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NonPositiveMode {
    /// Redraw until positive (bounded by --max-attempts)
    Resample,
    /// Fail immediately
    Reject,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatType {
    Text,
    Json,
    Csv,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.command.is_none() && self.config.is_none() {
            anyhow::bail!("must specify a distribution subcommand or --config");
        }

        if let Some(attempts) = self.max_attempts {
            if attempts == 0 {
                anyhow::bail!("max_attempts must be at least 1");
            }
        }

        Ok(())
    }
}
