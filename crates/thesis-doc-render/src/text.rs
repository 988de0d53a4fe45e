//! Plain text rendering for terminals.

use console::{measure_text_width, Style};
use thesis_doc_content::{Document, Inline, NoteTone, SectionBody};

use crate::traits::{Format, RenderError, Renderer};

/// Renders the document as terminal text.
///
/// Styling (bold headings, dim notes) is off unless explicitly enabled, so the
/// default output is the same whether or not stdout is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    styled: bool,
}

impl TextRenderer {
    /// Unstyled output.
    pub fn plain() -> Self {
        Self { styled: false }
    }

    /// Output with ANSI styling.
    pub fn styled() -> Self {
        Self { styled: true }
    }

    fn heading(&self) -> Style {
        Style::new().bold().force_styling(self.styled)
    }

    fn strong(&self) -> Style {
        Style::new().bold().force_styling(self.styled)
    }

    fn code(&self) -> Style {
        Style::new().cyan().force_styling(self.styled)
    }

    fn muted(&self) -> Style {
        Style::new().dim().force_styling(self.styled)
    }

    fn inline(&self, runs: &[Inline]) -> String {
        runs.iter()
            .map(|run| match run {
                Inline::Text(text) => text.to_string(),
                Inline::Strong(text) => self.strong().apply_to(text).to_string(),
                Inline::Code(text) => self.code().apply_to(text).to_string(),
            })
            .collect()
    }

    fn list(&self, out: &mut Vec<String>, items: &[&[Inline]], ordered: bool) {
        for (index, item) in items.iter().enumerate() {
            let marker = if ordered {
                format!("{:>2}.", index + 1)
            } else {
                "  *".to_string()
            };
            out.push(format!("{} {}", marker, self.inline(item)));
        }
    }

    fn title(&self, out: &mut Vec<String>, title: &str, rule: char) {
        let width = measure_text_width(title);
        out.push(self.heading().apply_to(title).to_string());
        out.push(rule.to_string().repeat(width));
    }
}

impl Renderer for TextRenderer {
    fn format(&self) -> Format {
        Format::Text
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        let mut lines = Vec::new();

        self.title(&mut lines, doc.header.title, '=');
        lines.push(self.muted().apply_to(doc.header.tagline).to_string());

        for section in doc.sections {
            lines.push(String::new());
            self.title(&mut lines, section.title, '-');

            if let Some(intro) = section.intro {
                lines.push(self.inline(intro));
                lines.push(String::new());
            }

            match section.body {
                SectionBody::Paragraph(runs) => lines.push(self.inline(runs)),
                SectionBody::OrderedList(items) => self.list(&mut lines, items, true),
                SectionBody::UnorderedList(items) => self.list(&mut lines, items, false),
                SectionBody::TwoColumn { left, right } => {
                    for (index, column) in [left, right].into_iter().enumerate() {
                        if index > 0 {
                            lines.push(String::new());
                        }
                        lines.push(self.heading().apply_to(column.title).to_string());
                        self.list(&mut lines, column.items, false);
                    }
                }
                SectionBody::CodeBlock(text) => {
                    lines.extend(text.lines().map(str::to_string));
                }
            }

            if let Some(note) = section.note {
                lines.push(String::new());
                let text = self.inline(note.text);
                lines.push(match note.tone {
                    NoteTone::Caption => self.muted().apply_to(text).to_string(),
                    NoteTone::Tip => text,
                });
            }
        }

        lines.push(String::new());
        lines.push(self.muted().apply_to(doc.footer.lead).to_string());
        self.list(&mut lines, doc.footer.items, false);

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}
