//! Preview server for the thesis document.
//!
//! Renders every output format once at startup and serves the results from
//! memory.

pub mod server;
pub mod site;

pub use server::{mount_path, router, PreviewServer, PreviewServerConfig, ServerError};
pub use site::RenderedSite;
