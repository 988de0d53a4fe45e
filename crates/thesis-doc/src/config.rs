//! Site configuration file (site.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thesis_doc_render::Format;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Paths to CSS stylesheets to include
    #[serde(default)]
    pub styles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: Option<u16>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            base_url: default_base_url(),
            styles: vec![],
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
            formats: default_formats(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_formats() -> Vec<String> {
    Format::ALL.iter().map(|f| f.name().to_string()).collect()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl BuildSettings {
    /// Parse the configured format names.
    pub fn formats(&self) -> Result<Vec<Format>> {
        self.formats
            .iter()
            .map(|name| {
                name.parse::<Format>()
                    .with_context(|| format!("Invalid format in [build] formats: {}", name))
            })
            .collect()
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub const DEFAULT_CONFIG: &str = r#"# thesis-doc configuration

[site]
# Output directory for built site
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Extra stylesheets copied into assets/
styles = []

[build]
# Minify the page stylesheet
minify = true

# Formats written by `thesis-doc build`
formats = ["html", "markdown", "text", "json"]

[server]
host = "127.0.0.1"
port = 7777
"#;
