//! Renderers and static site builder for the thesis document.
//!
//! Every renderer maps the same typed [`Document`](thesis_doc_content::Document)
//! to one output representation. Rendering is pure: the same document always
//! produces byte-identical output.

pub mod assets;
pub mod builder;
pub mod html;
pub mod json;
pub mod markdown;
pub mod text;
pub mod traits;

pub use assets::{AssetPipeline, Stylesheet};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use html::{HtmlRenderer, PageOptions};
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;
pub use traits::{render_document, Format, RenderError, Renderer};
