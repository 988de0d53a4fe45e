//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thesis_doc_content::Document;

use crate::assets::{AssetPipeline, Stylesheet};
use crate::html::{HtmlRenderer, PageOptions};
use crate::traits::{Format, RenderError, Renderer};

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Formats to write; HTML also brings the stylesheet, sitemap and outline index
    pub formats: Vec<Format>,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            formats: Format::ALL.to_vec(),
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Files written, relative to the output directory
    pub files: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render document: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Writes the rendered document and its assets to disk.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site for the given document.
    pub fn build(&self, doc: &Document) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let mut files = Vec::new();
        let formats = self.formats();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // The page links only stylesheets that will actually be copied.
        let sheets = if formats.contains(&Format::Html) {
            AssetPipeline::load_stylesheets(&self.config.styles).map_err(|e| {
                BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
            })?
        } else {
            vec![]
        };
        let html = HtmlRenderer::with_options(PageOptions::with_stylesheets(
            &self.config.base_url,
            &sheets,
        ));

        for format in &formats {
            let output = match format {
                Format::Html => html.render(doc)?,
                other => other.renderer().render(doc)?,
            };

            self.write(Path::new(format.file_name()), &output, &mut files)?;
            tracing::debug!("Rendered {} ({} bytes)", format, output.len());
        }

        if formats.contains(&Format::Html) {
            self.generate_assets(&sheets, &mut files)?;
            self.generate_outline_index(doc, &mut files)?;
            self.generate_sitemap(&mut files)?;
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Configured formats, deduplicated, in the order given.
    fn formats(&self) -> Vec<Format> {
        let mut formats = Vec::new();
        for format in &self.config.formats {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }

    fn write(
        &self,
        relative: &Path,
        contents: &str,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), BuildError> {
        let path = self.config.output_dir.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&path, contents)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;

        files.push(relative.to_path_buf());
        Ok(())
    }

    /// Generate static assets.
    fn generate_assets(
        &self,
        sheets: &[Stylesheet],
        files: &mut Vec<PathBuf>,
    ) -> Result<(), BuildError> {
        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css.clone()
            })
        } else {
            css
        };
        self.write(Path::new("assets/main.css"), &css, files)?;

        for sheet in sheets {
            let target = Path::new("assets").join(&sheet.file_name);
            self.write(&target, &sheet.content, files)?;
            tracing::info!("Copied stylesheet {}", sheet.file_name);
        }

        Ok(())
    }

    /// Generate an anchor index of the page headings.
    fn generate_outline_index(
        &self,
        doc: &Document,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = doc
            .outline()
            .into_iter()
            .map(|entry| {
                serde_json::json!({
                    "title": entry.title,
                    "url": format!("{}#{}", self.config.base_url, entry.id),
                    "level": entry.level,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index).map_err(RenderError::from)?;

        self.write(Path::new("outline.json"), &json, files)
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, files: &mut Vec<PathBuf>) -> Result<(), BuildError> {
        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}</loc>
  </url>
</urlset>"#,
            self.config.base_url
        );
        self.write(Path::new("sitemap.xml"), &sitemap, files)?;

        // Also generate robots.txt
        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        self.write(Path::new("robots.txt"), &robots, files)
    }
}
