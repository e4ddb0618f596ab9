// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the widget runs. Subcommands manage configuration:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// feedbox - a social feed in your terminal
#[derive(Parser)]
#[command(name = "feedbox")]
#[command(version = VERSION)]
#[command(about = "Post, filter, react and comment in a terminal feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the feed with sample posts
    #[arg(long)]
    pub demo: bool,

    /// Author identity for this session (overrides config and FEEDBOX_AUTHOR)
    #[arg(long, value_name = "ID")]
    pub author: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Fold run flags into the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if self.demo {
            config.demo_mode = true;
        }
        if let Some(author) = self.author.as_deref().map(str::trim) {
            if !author.is_empty() {
                config.author = author.to_string();
            }
        }
    }
}

/// Run a subcommand to completion
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Config {
            show,
            reset,
            edit,
            path,
        } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show();
                Ok(())
            } else if reset {
                handle_config_reset()
            } else if edit {
                handle_config_edit()
            } else {
                println!("Usage: feedbox config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    println!("# Available themes: {}", Theme::list_available().join(", "));
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor {:?}", editor))?;

    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_flags_override_config() {
        let cli = Cli::parse_from(["feedbox", "--demo", "--author", " me@example.com "]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.demo_mode);
        assert_eq!(config.author, "me@example.com");
    }

    #[test]
    fn test_blank_author_flag_is_ignored() {
        let cli = Cli::parse_from(["feedbox", "--author", "  "]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.author, crate::feed::DEFAULT_AUTHOR);
        assert!(!config.demo_mode);
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::parse_from(["feedbox", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
