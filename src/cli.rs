use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// spoken-time - Convert clock times into British English spoken phrases
#[derive(Debug, Parser)]
#[command(name = "spoken-time")]
#[command(about = "Convert clock times into British English spoken phrases", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if neither a command nor times are given, enters interactive mode)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Times to convert in HH:MM or H:MM format
    pub times: Vec<String>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Speak the current local time
    Now,

    /// View or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the effective configuration
    #[command(aliases = ["list", "get"])]
    Show,

    /// Print where the configuration file is read from
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["spoken-time"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.times.is_empty());
    }

    #[test]
    fn test_positional_times() {
        let cli = Cli::try_parse_from(["spoken-time", "10:30", "11:45"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.times, vec!["10:30", "11:45"]);
    }

    #[test]
    fn test_now_subcommand() {
        let cli = Cli::try_parse_from(["spoken-time", "now", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Now)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["spoken-time", "-v", "now"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Now)));
        assert!(cli.verbose);
        assert!(cli.times.is_empty());

        let cli = Cli::try_parse_from(["spoken-time", "--config", "x.toml", "config", "path"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { action: ConfigActions::Path })));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(cli.times.is_empty());
    }

    #[test]
    fn test_flags_before_times_stay_in_batch_mode() {
        let cli = Cli::try_parse_from(["spoken-time", "-v", "7:35", "11:59"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.times, vec!["7:35", "11:59"]);
    }

    #[test]
    fn test_config_init_force() {
        let cli =
            Cli::try_parse_from(["spoken-time", "config", "init", "--force", "--config", "x.toml"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { action: ConfigActions::Init { force: true } })
        ));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
