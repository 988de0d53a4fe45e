//! Print the document to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use thesis_doc_content::document;
use thesis_doc_render::{Format, Renderer, TextRenderer};

/// Run the render command.
pub fn run(format: Format, color: bool) -> Result<()> {
    let output = match format {
        Format::Text if color => TextRenderer::styled().render(document())?,
        other => other.renderer().render(document())?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
