use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use spoken_time::app::Application;
use spoken_time::cli::{Cli, Commands, ConfigActions};
use spoken_time::config::{get_config_path, Config};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    spoken_time::init_logger(level);
    info!("Starting {}", spoken_time::version::version_line());

    let app = Application::new(config.clone());

    match cli.command {
        Some(Commands::Now) => {
            if !app.run_now()? {
                std::process::exit(1);
            }
        }
        Some(Commands::Config { action }) => handle_config(action, cli.config, &config)?,
        None if cli.times.is_empty() => app.run()?,
        None => {
            let failures = app.run_batch(&cli.times)?;
            if failures > 0 {
                info!("{} of {} time(s) could not be converted", failures, cli.times.len());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn handle_config(action: ConfigActions, path: Option<PathBuf>, config: &Config) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => get_config_path()?,
    };

    match action {
        ConfigActions::Show => print!("{}", config.to_toml()?),
        ConfigActions::Path => println!("{}", path.display()),
        ConfigActions::Init { force } => {
            if path.exists() && !force {
                bail!("Config file {} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
