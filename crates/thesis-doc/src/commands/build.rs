//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thesis_doc_content::document;
use thesis_doc_render::{BuildConfig, SiteBuilder};

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        minify: minify.unwrap_or(file_config.build.minify),
        base_url: file_config.site.base_url.clone(),
        formats: file_config.build.formats()?,
        styles: file_config.site.styles.clone(),
    };

    let result = SiteBuilder::new(config).build(document())?;

    tracing::info!(
        "Wrote {} files in {}ms",
        result.files.len(),
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
