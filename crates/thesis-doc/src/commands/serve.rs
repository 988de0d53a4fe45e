//! Serve a built site directory.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use thesis_doc_server::mount_path;
use tower_http::services::ServeDir;

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.site.output));

    if !dir.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'thesis-doc build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("{}:{}", file_config.server.host, port)
        .parse()
        .with_context(|| format!("Invalid address {}:{}", file_config.server.host, port))?;

    // Built pages link assets under base_url, so the directory is mounted there.
    let base = mount_path(&file_config.site.base_url);
    let files = ServeDir::new(&dir);
    let app = if base == "/" {
        Router::new().fallback_service(files)
    } else {
        Router::new().nest_service(base.trim_end_matches('/'), files)
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let url = format!("http://{}{}", addr, base);
    tracing::info!("Serving {} at {}", dir.display(), url);

    if open {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
