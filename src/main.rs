//! pseudo-rand CLI entry point

use anyhow::{Context, Result};
use pseudo_rand::config::cli::Cli;
use pseudo_rand::config::{cli_convert, toml, validator, Config};
use pseudo_rand::worker::BatchRunner;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    configure_logging(&cli)?;

    let config = toml::build_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    let request = config.request()?;

    if cli.dry_run {
        print_configuration(&config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let runner = BatchRunner::new(config.sampler.core(), config.run.threads).with_seed(config.run.seed);
    let batch = runner.run(&request, config.run.count)?;

    pseudo_rand::output::write_batch(&config.output, &request, config.run.seed, &batch)
}

/// Install the logger: stderr by default, a file with --log-file
fn configure_logging(cli: &Cli) -> Result<()> {
    let level = cli_convert::parse_log_level(&cli.log_level)?;
    let logging = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let logger: Box<dyn SharedLogger> = match cli.log_file {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            WriteLogger::new(level, logging, file)
        }
        None => TermLogger::new(level, logging, TerminalMode::Stderr, ColorChoice::Auto),
    };

    CombinedLogger::init(vec![logger]).context("Failed to initialise logging")?;

    log::debug!(
        "pseudo-rand v{} started at {}",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().to_rfc2822()
    );
    Ok(())
}

/// Print the effective configuration
fn print_configuration(config: &Config) {
    println!("Configuration:");
    if let Some(ref request) = config.distribution {
        println!("  Distribution: {}", request);
    }
    println!("  Sampler:");
    println!("    Engine: {}", config.sampler.engine);
    println!("    Non-positive policy: {}", config.sampler.non_positive);
    println!("    Max attempts: {}", config.sampler.max_attempts);
    println!("  Run:");
    println!("    Count: {}", config.run.count);
    match config.run.seed {
        Some(seed) => println!("    Seed: {}", seed),
        None => println!("    Seed: entropy"),
    }
    if config.run.threads == 0 {
        println!("    Threads: auto ({})", num_cpus::get());
    } else {
        println!("    Threads: {}", config.run.threads);
    }
    println!("  Output:");
    println!("    Format: {}", config.output.format);
    match config.output.path {
        Some(ref path) => println!("    Path: {}", path.display()),
        None => println!("    Path: stdout"),
    }
    println!("    Summary: {}", config.output.summary);
}
