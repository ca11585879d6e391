use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the inventory tool.
///
/// With no targets, the configured target list is scanned; with neither,
/// the local machine is. Targets are always scanned one at a time, in
/// order — there is deliberately no parallel mode, so a bulk scan never
/// hammers the management infrastructure.
#[derive(Parser, Debug)]
#[clap(name = "rust-inventory", about = "Windows computer inventory collection tool")]
pub struct Args {
    /// Hostnames or IPs to inventory (empty = local machine)
    pub targets: Vec<String>,

    /// Query Active Directory membership for the local machine
    #[clap(short = 'd', long)]
    pub include_directory: bool,

    /// Directory to write per-host JSON results into
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Print raw JSON to stdout instead of the text report
    #[clap(long)]
    pub json: bool,

    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the inventory tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = "inventory.yaml")]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_args_parsing() {
        let args = Args::parse_from([
            "rust-inventory",
            "WS-0042",
            "PRN-LOBBY",
            "--output",
            "/tmp/results",
            "--verbose",
        ]);

        assert_eq!(args.targets, vec!["WS-0042", "PRN-LOBBY"]);
        assert_eq!(args.output, Some(PathBuf::from("/tmp/results")));
        assert!(args.verbose);
        assert!(!args.include_directory);
        assert!(!args.json);
    }

    #[test]
    fn test_default_values() {
        let args = Args::parse_from(["rust-inventory"]);

        assert!(args.targets.is_empty());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_directory_and_json_flags() {
        let args = Args::parse_from(["rust-inventory", "-d", "--json"]);
        assert!(args.include_directory);
        assert!(args.json);
    }

    #[test]
    fn test_init_config_subcommand() {
        let args = Args::parse_from(["rust-inventory", "init-config", "custom.yaml"]);

        match args.command {
            Some(Commands::InitConfig { path }) => {
                assert_eq!(path, PathBuf::from("custom.yaml"));
            }
            _ => panic!("Expected InitConfig command"),
        }
    }

    #[test]
    fn test_init_config_default_path() {
        let args = Args::parse_from(["rust-inventory", "init-config"]);

        match args.command {
            Some(Commands::InitConfig { path }) => {
                assert_eq!(path, PathBuf::from("inventory.yaml"));
            }
            _ => panic!("Expected InitConfig command"),
        }
    }
}
