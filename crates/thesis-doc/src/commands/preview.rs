//! Preview server command.

use std::path::Path;

use anyhow::Result;
use thesis_doc_server::{PreviewServer, PreviewServerConfig};

use crate::config::load_config;

/// Run the preview server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let defaults = PreviewServerConfig::default();

    let config = PreviewServerConfig {
        port: port.or(file_config.server.port).unwrap_or(defaults.port),
        host: file_config.server.host,
        open,
        base_url: file_config.site.base_url,
        styles: file_config.site.styles,
    };

    tracing::info!("Starting preview server on port {}", config.port);

    PreviewServer::new(config).start().await?;

    Ok(())
}
