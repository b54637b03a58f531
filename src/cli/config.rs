//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Image location to add to the category triggers
    #[arg(long, value_name = "LOC")]
    add_trigger: Vec<String>,

    /// Image location to remove from the category triggers
    #[arg(long, value_name = "LOC")]
    remove_trigger: Vec<String>,

    /// Default export destination
    #[arg(long, value_name = "FILE")]
    export_path: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    triggers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_path: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.add_trigger.is_empty() && self.remove_trigger.is_empty() && self.export_path.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --add-trigger, --remove-trigger, or --export-path",
            ));
        }

        let mut config = load_config()?;
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        for image in &self.remove_trigger {
            if !config.remove_trigger(image) {
                return Err(CliError::validation(format!(
                    "Trigger '{image}' is not configured"
                )));
            }
        }

        for image in &self.add_trigger {
            config
                .add_trigger(image.as_str())
                .map_err(|e| CliError::validation(format!("Invalid trigger: {e}")))?;
        }

        if let Some(path) = &self.export_path {
            config.export.default_path = Some(path.clone());
        }

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: config_file_display(),
        triggers: config.triggers.images.clone(),
        export_path: config
            .export
            .default_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{} Configuration", APP_NAME);
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("Config file: {}", config_file_display());
    println!();

    println!("Category triggers:");
    if config.triggers.images.is_empty() {
        println!("  (none)");
    }
    for image in &config.triggers.images {
        println!("  {image}");
    }
    println!();

    println!("Export:");
    match &config.export.default_path {
        Some(path) => println!("  Default path: {}", path.display()),
        None => println!("  Default path: (board_export_[date].txt)"),
    }
    println!();
}

fn config_file_display() -> String {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unavailable)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args(add: &[&str], remove: &[&str], export: Option<&str>) -> ConfigSetArgs {
        ConfigSetArgs {
            add_trigger: add.iter().map(ToString::to_string).collect(),
            remove_trigger: remove.iter().map(ToString::to_string).collect(),
            export_path: export.map(PathBuf::from),
        }
    }

    #[test]
    fn test_apply_add_and_remove() {
        let mut config = Config::new();
        set_args(&["img/toys/box.png"], &["img/clothing/hanger.png"], None)
            .apply(&mut config)
            .unwrap();

        assert_eq!(
            config.triggers.images,
            vec!["img/food/plate.png", "img/toys/box.png"]
        );
    }

    #[test]
    fn test_apply_remove_unknown() {
        let mut config = Config::new();
        let err = set_args(&[], &["img/none.png"], None)
            .apply(&mut config)
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_apply_export_path() {
        let mut config = Config::new();
        set_args(&[], &[], Some("/tmp/board.txt"))
            .apply(&mut config)
            .unwrap();
        assert_eq!(
            config.export.default_path,
            Some(PathBuf::from("/tmp/board.txt"))
        );
    }

    #[test]
    fn test_apply_rejects_whitespace_trigger() {
        let mut config = Config::new();
        assert!(set_args(&["my plate.png"], &[], None)
            .apply(&mut config)
            .is_err());
    }
}
