//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{convert_command, convert_engine_type, convert_format, convert_non_positive};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override distribution
    if let Some(command) = cli.command {
        let request = convert_command(command);
        if let Some(previous) = config.distribution {
            log::info!("subcommand {} overrides configured {}", request, previous);
        }
        config.distribution = Some(request);
    }

    // Override sampler settings
    if let Some(engine) = cli.engine {
        config.sampler.engine = convert_engine_type(engine);
    }
    if let Some(mode) = cli.non_positive {
        config.sampler.non_positive = convert_non_positive(mode);
    }
    if let Some(attempts) = cli.max_attempts {
        config.sampler.max_attempts = attempts;
    }

    // Override run settings
    if let Some(count) = cli.count {
        config.run.count = count;
    }
    if cli.seed.is_some() {
        config.run.seed = cli.seed;
    }
    if let Some(threads) = cli.threads {
        config.run.threads = threads;
    }

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = convert_format(format);
    }
    if let Some(ref path) = cli.output {
        config.output.path = Some(path.clone());
    }
    if cli.summary {
        config.output.summary = true;
    }

    Ok(config)
}

/// Build the effective configuration: file (if any) overlaid with CLI flags
pub fn build_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    const FULL: &str = r#"
        [distribution]
        kind = "normal"
        mean = 10.0
        stddev = 2.0

        [sampler]
        engine = "thread_local"
        non_positive = "reject"
        max_attempts = 5

        [run]
        count = 250
        seed = 9
        threads = 2

        [output]
        format = "csv"
        path = "out.csv"
        summary = true
    "#;

    #[test]
    fn test_parse_full() {
        let config = parse_toml_string(FULL).unwrap();

        assert_eq!(
            config.distribution,
            Some(DistributionRequest::Normal { mean: 10.0, stddev: 2.0 })
        );
        assert_eq!(config.sampler.engine, EngineMode::ThreadLocal);
        assert_eq!(config.sampler.non_positive, NonPositivePolicy::Reject);
        assert_eq!(config.sampler.max_attempts, 5);
        assert_eq!(config.run.count, 250);
        assert_eq!(config.run.seed, Some(9));
        assert_eq!(config.run.threads, 2);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.path, Some(PathBuf::from("out.csv")));
        assert!(config.output.summary);
    }

    #[test]
    fn test_parse_minimal() {
        let config = parse_toml_string(
            r#"
            [distribution]
            kind = "uniform_int"
            min = -5
            max = 5
            "#,
        )
        .unwrap();

        assert_eq!(
            config.distribution,
            Some(DistributionRequest::UniformInt { min: -5, max: 5 })
        );
        assert_eq!(config.sampler, SamplerConfig::default());
        assert_eq!(config.run, RunConfig::default());
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = parse_toml_string(
            r#"
            [distribution]
            kind = "cauchy"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = parse_toml_string(FULL).unwrap();
        let cli = Cli::try_parse_from([
            "pseudo-rand",
            "exp",
            "4",
            "-n",
            "3",
            "--format",
            "json",
            "--engine",
            "per-call",
        ])
        .unwrap();

        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.distribution, Some(DistributionRequest::Exponential { lambda: 4.0 }));
        assert_eq!(merged.run.count, 3);
        assert_eq!(merged.output.format, OutputFormat::Json);
        assert_eq!(merged.sampler.engine, EngineMode::PerCall);
        // Untouched by the CLI
        assert_eq!(merged.run.seed, Some(9));
        assert_eq!(merged.sampler.max_attempts, 5);
        assert!(merged.output.summary);
    }

    #[test]
    fn test_build_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["pseudo-rand", "--config", &path, "--seed", "1"]).unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.run.seed, Some(1));
        assert_eq!(config.run.count, 250);
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = Cli::try_parse_from(["pseudo-rand", "--config", "/nonexistent/pseudo-rand.toml"])
            .unwrap();
        let err = build_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
