//! Typed content model for the agentic AI thesis document.
//!
//! The document is authored once as static data. Renderers in
//! `thesis-doc-render` consume the same structure for every output target.

pub mod model;
pub mod thesis;

pub use model::{
    plain_text, slugify, Column, Document, Footer, Header, Inline, Note, NoteTone, OutlineEntry,
    RichText, Section, SectionBody,
};
pub use thesis::{document, THESIS};
