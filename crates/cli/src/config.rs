//! Configuration loading and management

use anyhow::{Context, Result};
use filed_recipes_domain::usecases::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_recipes_file")]
    pub recipes_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_panel_width")]
    pub panel_width: usize,

    #[serde(default)]
    pub number_instructions: bool,
}

// Default value functions
fn default_recipes_file() -> PathBuf {
    PathBuf::from("./recipes.txt")
}

fn default_panel_width() -> usize {
    40
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            recipes_file: default_recipes_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel_width: default_panel_width(),
            number_instructions: false,
        }
    }
}

impl DisplayConfig {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            panel_width: self.panel_width,
            number_instructions: self.number_instructions,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("FILED_RECIPES")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# filed-recipes configuration

[general]
# Recipe file, relative paths are resolved against the working directory
recipes_file = "./recipes.txt"

[display]
panel_width = 40
number_instructions = false
"#
        .to_string()
    }
}
