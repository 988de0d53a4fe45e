//! Asset pipeline for the page stylesheet.

use std::fs;
use std::io;
use std::path::Path;

/// A configured stylesheet, published under `assets/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// File name inside `assets/`
    pub file_name: String,
    pub content: String,
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Read configured stylesheets. Paths that do not exist are skipped.
    pub fn load_stylesheets(paths: &[String]) -> io::Result<Vec<Stylesheet>> {
        let mut sheets: Vec<Stylesheet> = Vec::new();

        for path in paths {
            let source = Path::new(path);
            if !source.exists() {
                tracing::warn!("Stylesheet not found: {}", path);
                continue;
            }

            let file_name = source
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("style.css")
                .to_string();
            if sheets.iter().any(|s| s.file_name == file_name) {
                tracing::warn!("Skipping {}: assets/{} already taken", path, file_name);
                continue;
            }

            let content = fs::read_to_string(source)?;
            sheets.push(Stylesheet { file_name, content });
        }

        Ok(sheets)
    }
}

// Fixed container: light page background, centered white card.
const DEFAULT_CSS: &str = r#"/* Thesis page theme */

:root {
  --page-background: #f9fafb;
  --card-background: #ffffff;
  --foreground: #111827;
  --body-text: #374151;
  --muted: #6b7280;
  --border: #e5e7eb;
  --code-background: #f3f4f6;
  --content-max-width: 56rem;
  --radius: 0.5rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--foreground);
  line-height: 1.6;
}

.page {
  min-height: 100vh;
  background: var(--page-background);
  padding: 1.5rem;
}

/* Header */
.page-header {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 1.5rem 0;
}

.page-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.page-title {
  font-size: 1.5rem;
  font-weight: 800;
}

.page-tagline {
  font-size: 0.875rem;
  color: var(--muted);
}

/* Main card */
.page-main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  background: var(--card-background);
  border-radius: var(--radius);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06);
  padding: 2rem;
}

.section {
  margin-bottom: 2rem;
}

.section h2 {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.section:first-child h2 {
  font-size: 1.25rem;
  font-weight: 700;
}

.section p {
  color: var(--body-text);
}

.section .intro {
  margin-bottom: 0.75rem;
}

.list-ordered,
.list-bulleted {
  padding-left: 1.25rem;
  color: var(--body-text);
}

.list-ordered {
  list-style: decimal;
}

.list-bulleted {
  list-style: disc;
}

.list-ordered li + li,
.list-bulleted li + li {
  margin-top: 0.5rem;
}

/* Two-column layout */
.columns {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

.column {
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.column h3 {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

@media (min-width: 768px) {
  .columns {
    grid-template-columns: repeat(2, 1fr);
  }
}

/* Notes */
.note {
  margin-top: 0.75rem;
  font-size: 0.875rem;
}

.section .note-caption {
  color: var(--muted);
}

.section .note-tip {
  color: #4b5563;
}

/* Code */
.code-block {
  background: var(--code-background);
  padding: 0.75rem;
  border-radius: var(--radius);
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  overflow-x: auto;
}

code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
  background: var(--code-background);
  padding: 0.125rem 0.25rem;
  border-radius: 0.25rem;
}

/* Footer */
.page-footer {
  margin-top: 2rem;
  font-size: 0.875rem;
  color: var(--muted);
}

.footer-lead {
  margin-bottom: 0.5rem;
}
"#;
