use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod cli;
mod collectors;
mod config;
mod constants;
mod facts;
mod models;
mod projection;
mod utils;

use cli::{Args, Commands};
use collectors::computer_info;
use config::ScanConfig;
use models::ComputerInfoResult;
use utils::summary;

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.verbose)?;

    if let Some(cmd) = &args.command {
        return handle_subcommand(cmd);
    }

    let config = load_config(&args)?;

    // Command line beats config; with neither, scan the local machine
    let targets: Vec<String> = if !args.targets.is_empty() {
        args.targets.clone()
    } else if !config.targets.is_empty() {
        config.targets.clone()
    } else {
        vec![String::new()]
    };

    let include_directory = args.include_directory || config.include_directory;
    let output_dir = args.output.clone().or_else(|| config.output_dir.clone());

    info!("Starting inventory scan of {} target(s)", targets.len());

    let mut failures = 0usize;
    for target in &targets {
        // Strictly sequential; a bulk scan must not flood the network
        let result = computer_info::collect(target, include_directory);
        if result.has_error() {
            failures += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", summary::render_report(&result));
        }

        if let Some(dir) = &output_dir {
            write_result(dir, &result)?;
        }
    }

    if failures > 0 {
        warn!(
            "Inventory scan finished: {}/{} target(s) reported errors",
            failures,
            targets.len()
        );
    } else {
        info!("Inventory scan completed successfully");
    }
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands (init-config)
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            ScanConfig::create_default_config_file(path)?;
            info!("Configuration created successfully");
            Ok(())
        }
    }
}

fn load_config(args: &Args) -> Result<ScanConfig> {
    match &args.config {
        Some(path) => ScanConfig::from_yaml_file(path),
        None => Ok(ScanConfig::default()),
    }
}

/// Write one result as `<hostname>.json` under the output directory.
fn write_result(dir: &Path, result: &ComputerInfoResult) -> Result<()> {
    fs::create_dir_all(dir)
        .context(format!("Failed to create output directory: {}", dir.display()))?;

    let file_name = if result.computer_name.is_empty() {
        "unknown-host.json".to_string()
    } else {
        format!("{}.json", result.computer_name)
    };
    let path = dir.join(file_name);

    let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
    fs::write(&path, json).context(format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}
