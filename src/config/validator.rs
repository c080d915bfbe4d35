//! Configuration validation

use super::*;
use anyhow::{Context, Result};

/// Upper bound on worker threads
pub const MAX_THREADS: usize = 1024;

/// Upper bound on samples per run
pub const MAX_COUNT: usize = crate::worker::MAX_COUNT;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sampler(&config.sampler)?;
    validate_distribution(config)?;
    validate_run(&config.run, &config.sampler)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate the distribution request against the configured sampler
fn validate_distribution(config: &Config) -> Result<()> {
    let request = config.request()?;
    config
        .sampler
        .core()
        .prepare(&request)
        .with_context(|| format!("Invalid distribution {}", request))?;

    Ok(())
}

/// Validate sampler configuration
pub fn validate_sampler(sampler: &SamplerConfig) -> Result<()> {
    if sampler.max_attempts == 0 {
        anyhow::bail!("max_attempts must be at least 1");
    }

    if sampler.non_positive == NonPositivePolicy::Reject && sampler.max_attempts != DEFAULT_MAX_ATTEMPTS {
        log::warn!(
            "max_attempts ({}) has no effect with non_positive = reject",
            sampler.max_attempts
        );
    }

    Ok(())
}

/// Validate run configuration
pub fn validate_run(run: &RunConfig, sampler: &SamplerConfig) -> Result<()> {
    if run.threads > MAX_THREADS {
        anyhow::bail!("threads must be between 0 and {}, got {}", MAX_THREADS, run.threads);
    }

    if run.count > MAX_COUNT {
        anyhow::bail!("count must be at most {}, got {}", MAX_COUNT, run.count);
    }

    if run.seed.is_some() && sampler.engine != EngineMode::PerCall {
        log::warn!("seed is set; engine = {} is ignored for seeded runs", sampler.engine);
    }

    if run.count == 0 {
        log::warn!("count is 0, no samples will be drawn");
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("output path must not be empty");
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("output directory does not exist: {}", parent.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::SampleError;

    fn config_for(request: DistributionRequest) -> Config {
        Config {
            distribution: Some(request),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config_for(DistributionRequest::Normal { mean: 0.0, stddev: 1.0 });
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_distribution() {
        let err = validate_config(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("no distribution specified"));
    }

    #[test]
    fn test_invalid_distribution() {
        let config = config_for(DistributionRequest::UniformInt { min: 5, max: 1 });
        let err = validate_config(&config).unwrap_err();
        let cause = err.downcast_ref::<SampleError>().unwrap();
        assert!(cause.is_invalid_parameter());
    }

    #[test]
    fn test_invalid_sampler() {
        let mut config = config_for(DistributionRequest::Exponential { lambda: 1.0 });
        config.sampler.max_attempts = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_threads() {
        let mut config = config_for(DistributionRequest::Exponential { lambda: 1.0 });
        config.run.threads = MAX_THREADS + 1;
        assert!(validate_config(&config).is_err());

        config.run.threads = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_count() {
        let mut config = config_for(DistributionRequest::Exponential { lambda: 1.0 });
        config.run.count = MAX_COUNT + 1;
        assert!(validate_config(&config).is_err());

        config.run.count = usize::MAX;
        assert!(validate_config(&config).is_err());

        config.run.count = MAX_COUNT;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_output_directory_must_exist() {
        let mut config = config_for(DistributionRequest::Exponential { lambda: 1.0 });
        config.output.path = Some(PathBuf::from("/nonexistent-dir/samples.csv"));
        assert!(validate_config(&config).is_err());

        let dir = tempfile::tempdir().unwrap();
        config.output.path = Some(dir.path().join("samples.csv"));
        assert!(validate_config(&config).is_ok());

        config.output.path = Some(PathBuf::from("samples.csv"));
        assert!(validate_config(&config).is_ok());
    }
}
