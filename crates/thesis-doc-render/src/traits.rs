//! Trait definitions for document renderers.

use std::fmt;
use std::str::FromStr;

use thesis_doc_content::{document, Document};

use crate::html::HtmlRenderer;
use crate::json::JsonRenderer;
use crate::markdown::MarkdownRenderer;
use crate::text::TextRenderer;

/// Output representations the document can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Markdown,
    Text,
    Json,
}

impl Format {
    /// Every supported format, HTML first.
    pub const ALL: [Format; 4] = [Format::Html, Format::Markdown, Format::Text, Format::Json];

    /// Format identifier (e.g., "html", "markdown")
    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Text => "text",
            Format::Json => "json",
        }
    }

    /// File name used when the format is written into a built site.
    pub fn file_name(self) -> &'static str {
        match self {
            Format::Html => "index.html",
            Format::Markdown => "thesis.md",
            Format::Text => "thesis.txt",
            Format::Json => "document.json",
        }
    }

    /// Content type served for this format.
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Markdown => "text/markdown; charset=utf-8",
            Format::Text => "text/plain; charset=utf-8",
            Format::Json => "application/json",
        }
    }

    /// A renderer for this format with default options.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Format::Html => Box::new(HtmlRenderer::new()),
            Format::Markdown => Box::new(MarkdownRenderer),
            Format::Text => Box::new(TextRenderer::plain()),
            Format::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "markdown" | "md" => Ok(Format::Markdown),
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors raised by the rendering framework.
///
/// The document itself is literal data and cannot be invalid; these only
/// surface if a template or serializer fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown format: {0} (expected html, markdown, text or json)")]
    UnknownFormat(String),
}

/// A target that turns the document into one output representation.
pub trait Renderer: Send + Sync {
    /// The format this renderer produces
    fn format(&self) -> Format;

    /// Render the document.
    ///
    /// Must be deterministic and free of side effects.
    fn render(&self, doc: &Document) -> Result<String, RenderError>;
}

/// Render the thesis document in the given format with default options.
pub fn render_document(format: Format) -> Result<String, RenderError> {
    format.renderer().render(document())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
        assert_eq!("MD".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!(matches!(
            "pdf".parse::<Format>(),
            Err(RenderError::UnknownFormat(name)) if name == "pdf"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn renderers_report_their_format() {
        for format in Format::ALL {
            assert_eq!(format.renderer().format(), format);
        }
    }

    #[test]
    fn every_format_is_deterministic() {
        for format in Format::ALL {
            let first = render_document(format).unwrap();
            let second = render_document(format).unwrap();
            assert_eq!(first, second, "{} output differs between calls", format);
        }
    }

    #[test]
    fn every_format_contains_every_section_title_in_order() {
        for format in [Format::Markdown, Format::Text, Format::Json] {
            let output = render_document(format).unwrap();
            let mut cursor = 0;

            for title in document().section_titles() {
                let found = output[cursor..]
                    .find(title)
                    .unwrap_or_else(|| panic!("{} missing '{}' in order", format, title));
                cursor += found + title.len();
            }
        }
    }
}
