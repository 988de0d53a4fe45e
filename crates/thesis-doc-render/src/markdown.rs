//! Markdown rendering.

use std::fmt::Write;

use thesis_doc_content::{Document, Inline, SectionBody};

use crate::traits::{Format, RenderError, Renderer};

/// Renders the document as CommonMark.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn format(&self) -> Format {
        Format::Markdown
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        let mut out = String::new();

        push_block(&mut out, &format!("# {}", doc.header.title));
        push_block(&mut out, &format!("*{}*", doc.header.tagline));

        for section in doc.sections {
            push_block(&mut out, &format!("## {}", section.title));

            if let Some(intro) = section.intro {
                push_block(&mut out, &inline(intro));
            }

            match section.body {
                SectionBody::Paragraph(runs) => push_block(&mut out, &inline(runs)),
                SectionBody::OrderedList(items) => push_block(&mut out, &list(items, true)),
                SectionBody::UnorderedList(items) => push_block(&mut out, &list(items, false)),
                SectionBody::TwoColumn { left, right } => {
                    for column in [left, right] {
                        push_block(&mut out, &format!("### {}", column.title));
                        push_block(&mut out, &list(column.items, false));
                    }
                }
                SectionBody::CodeBlock(text) => {
                    let mut fence = String::from("```text\n");
                    fence.push_str(text);
                    if !text.ends_with('\n') {
                        fence.push('\n');
                    }
                    fence.push_str("```");
                    push_block(&mut out, &fence);
                }
            }

            if let Some(note) = section.note {
                push_block(&mut out, &format!("> {}", inline(note.text)));
            }
        }

        push_block(&mut out, "---");
        push_block(&mut out, doc.footer.lead);
        push_block(&mut out, &list(doc.footer.items, false));

        Ok(out)
    }
}

/// Append a block followed by a blank line separator.
fn push_block(out: &mut String, block: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(block);
    out.push('\n');
}

fn inline(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => text.to_string(),
            Inline::Strong(text) => format!("**{}**", text),
            Inline::Code(text) => format!("`{}`", text),
        })
        .collect()
}

fn list(items: &[&[Inline]], ordered: bool) -> String {
    let mut out = String::new();

    for (index, item) in items.iter().enumerate() {
        if ordered {
            let _ = writeln!(out, "{}. {}", index + 1, inline(item));
        } else {
            let _ = writeln!(out, "- {}", inline(item));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
    use thesis_doc_content::{document, thesis::REPOSITORY_LAYOUT};

    fn render() -> String {
        MarkdownRenderer.render(document()).unwrap()
    }

    /// Collect heading texts at the given level.
    fn headings(markdown: &str, wanted: HeadingLevel) -> Vec<String> {
        let mut found = Vec::new();
        let mut current: Option<String> = None;

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Heading { level, .. }) if level == wanted => {
                    current = Some(String::new());
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = current.as_mut() {
                        heading.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(heading) = current.take() {
                        found.push(heading);
                    }
                }
                _ => {}
            }
        }

        found
    }

    #[test]
    fn section_headings_parse_back_in_order() {
        let md = render();

        assert_eq!(
            headings(&md, HeadingLevel::H1),
            vec!["Agentic AI — Thesis Project".to_string()]
        );
        assert_eq!(
            headings(&md, HeadingLevel::H2),
            document()
                .section_titles()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            headings(&md, HeadingLevel::H3),
            vec![
                "Power-system modelling".to_string(),
                "Communication & control simulation".to_string()
            ]
        );
    }

    #[test]
    fn code_block_parses_back_verbatim() {
        let md = render();
        let mut in_block = false;
        let mut block = String::new();

        for event in Parser::new(&md) {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    assert_eq!(&*info, "text");
                    in_block = true;
                }
                Event::Text(text) if in_block => block.push_str(&text),
                Event::End(TagEnd::CodeBlock) => in_block = false,
                _ => {}
            }
        }

        assert_eq!(block, REPOSITORY_LAYOUT);
    }

    #[test]
    fn numbers_ordered_lists() {
        let md = render();

        assert!(md.contains("1. **Introduction & Motivation** — state of substations"));
        assert!(md.contains("8. **Conclusions & Future Work**"));
        assert!(md.contains("1. Clone the repo skeleton and open `website/` to edit"));
    }

    #[test]
    fn renders_notes_as_quotes() {
        let md = render();

        assert!(md.contains("> Note: pandapower and GridLAB-D"));
        assert!(md.contains("> Tip: Keep the simulations"));
    }

    #[test]
    fn footer_follows_rule() {
        let md = render();
        let rule = md.find("\n---\n").unwrap();

        assert!(md[rule..].contains("If you'd like, I can:"));
        assert!(md.ends_with("- Produce a LaTeX thesis skeleton or Markdown draft from this outline.\n"));
    }
}
