//! Pre-rendered site contents.

use thesis_doc_content::Document;
use thesis_doc_render::{
    AssetPipeline, Format, HtmlRenderer, PageOptions, RenderError, Renderer, Stylesheet,
};

/// Every output format of the document, rendered once.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    base_url: String,
    html: String,
    markdown: String,
    text: String,
    json: String,
    css: String,
    stylesheets: Vec<Stylesheet>,
}

impl RenderedSite {
    /// Render the document in every format, linking the page under `base_url`.
    pub fn render(
        doc: &Document,
        base_url: &str,
        stylesheets: Vec<Stylesheet>,
    ) -> Result<Self, RenderError> {
        let page = PageOptions::with_stylesheets(base_url, &stylesheets);

        let site = Self {
            base_url: base_url.to_string(),
            html: HtmlRenderer::with_options(page).render(doc)?,
            markdown: Format::Markdown.renderer().render(doc)?,
            text: Format::Text.renderer().render(doc)?,
            json: Format::Json.renderer().render(doc)?,
            css: AssetPipeline::generate_css(),
            stylesheets,
        };

        tracing::debug!(
            "Rendered site: {} bytes of HTML, {} bytes of CSS",
            site.html.len(),
            site.css.len()
        );

        Ok(site)
    }

    /// Path the page is mounted under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rendered output for a format.
    pub fn get(&self, format: Format) -> &str {
        match format {
            Format::Html => &self.html,
            Format::Markdown => &self.markdown,
            Format::Text => &self.text,
            Format::Json => &self.json,
        }
    }

    /// Page stylesheet.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Stylesheet served as `assets/<name>`, if any.
    pub fn asset(&self, name: &str) -> Option<&str> {
        if name == "main.css" {
            return Some(&self.css);
        }
        self.stylesheets
            .iter()
            .find(|s| s.file_name == name)
            .map(|s| s.content.as_str())
    }
}
