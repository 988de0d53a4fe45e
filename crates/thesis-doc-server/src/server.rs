//! Preview server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use thesis_doc_content::document;
use thesis_doc_render::{AssetPipeline, Format, RenderError};

use crate::site::RenderedSite;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Path the page is served under
    pub base_url: String,

    /// Paths to extra stylesheets served from `assets/`
    pub styles: Vec<String>,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            base_url: "/".to_string(),
            styles: vec![],
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to render document: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to read stylesheet: {0}")]
    Stylesheet(#[from] std::io::Error),

    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    Serve(String),
}

/// Preview server.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Address the server will bind to.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse::<SocketAddr>().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Render the document and serve it until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr()?;

        let base = mount_path(&self.config.base_url);
        if base != self.config.base_url {
            tracing::warn!(
                "Serving under {} instead of base_url {}",
                base,
                self.config.base_url
            );
        }

        let sheets = AssetPipeline::load_stylesheets(&self.config.styles)?;
        let site = Arc::new(RenderedSite::render(document(), &base, sheets)?);

        let app = router(site);

        tracing::info!("Starting preview server at http://{}{}", addr, base);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}{}", addr, base);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        Ok(())
    }
}

/// Normalize a base URL to a route prefix of the form `/a/b/`.
///
/// Anything that is not a plain absolute path (a full URL, empty, or with
/// characters outside unreserved URL characters) mounts at `/`.
pub fn mount_path(base_url: &str) -> String {
    if !base_url.starts_with('/') {
        return "/".to_string();
    }

    let segments: Vec<&str> = base_url.split('/').filter(|s| !s.is_empty()).collect();
    let plain = segments.iter().all(|segment| {
        segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    });

    if segments.is_empty() || !plain {
        return "/".to_string();
    }
    format!("/{}/", segments.join("/"))
}

/// Build the router serving a pre-rendered site under its base URL.
pub fn router(site: Arc<RenderedSite>) -> Router {
    let base = site.base_url().to_string();

    let mut app = Router::new()
        .route(&base, get(html_handler))
        .route(&format!("{}index.html", base), get(html_handler))
        .route(&format!("{}assets/{{name}}", base), get(asset_handler))
        .route(&format!("{}thesis.md", base), get(markdown_handler))
        .route(&format!("{}thesis.txt", base), get(text_handler))
        .route(&format!("{}document.json", base), get(json_handler))
        .route("/health", get(health_handler));

    if base != "/" {
        app = app.route(base.trim_end_matches('/'), get(html_handler));
    }

    app.fallback(not_found_handler).with_state(site)
}

fn rendered(site: &RenderedSite, format: Format) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, format.media_type())],
        site.get(format).to_string(),
    )
}

async fn html_handler(State(site): State<Arc<RenderedSite>>) -> impl IntoResponse {
    rendered(&site, Format::Html)
}

async fn markdown_handler(State(site): State<Arc<RenderedSite>>) -> impl IntoResponse {
    rendered(&site, Format::Markdown)
}

async fn text_handler(State(site): State<Arc<RenderedSite>>) -> impl IntoResponse {
    rendered(&site, Format::Text)
}

async fn json_handler(State(site): State<Arc<RenderedSite>>) -> impl IntoResponse {
    rendered(&site, Format::Json)
}

async fn asset_handler(
    State(site): State<Arc<RenderedSite>>,
    Path(name): Path<String>,
) -> Response {
    match site.asset(&name) {
        Some(css) => (
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            css.to_string(),
        )
            .into_response(),
        None => not_found_handler().await.into_response(),
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
