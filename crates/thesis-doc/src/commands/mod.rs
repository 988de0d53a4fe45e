//! CLI command implementations.

pub mod build;
pub mod init;
pub mod preview;
pub mod render;
pub mod serve;
