//! Document model: an ordered sequence of titled sections.

use serde::Serialize;

/// A run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text(&'static str),
    /// Emphasized lead-in or statement
    Strong(&'static str),
    /// Path or identifier
    Code(&'static str),
}

impl Inline {
    /// The literal text of this run, without markup.
    pub fn text(&self) -> &'static str {
        match self {
            Inline::Text(s) | Inline::Strong(s) | Inline::Code(s) => s,
        }
    }
}

/// A sequence of inline runs forming one paragraph or list item.
pub type RichText = &'static [Inline];

/// Concatenate the literal text of a sequence of runs.
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter().map(Inline::text).collect()
}

/// One column of a two-column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column heading
    pub title: &'static str,
    /// Bulleted items
    pub items: &'static [RichText],
}

/// The content of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(RichText),
    OrderedList(&'static [RichText]),
    UnorderedList(&'static [RichText]),
    TwoColumn { left: Column, right: Column },
    /// Preformatted text, rendered verbatim.
    CodeBlock(&'static str),
}

impl SectionBody {
    /// Number of list items, or `None` for bodies that are not lists.
    ///
    /// A two-column body counts the items of both columns.
    pub fn item_count(&self) -> Option<usize> {
        match self {
            SectionBody::OrderedList(items) | SectionBody::UnorderedList(items) => {
                Some(items.len())
            }
            SectionBody::TwoColumn { left, right } => Some(left.items.len() + right.items.len()),
            SectionBody::Paragraph(_) | SectionBody::CodeBlock(_) => None,
        }
    }

    /// Whether the body renders no visible text.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::Paragraph(runs) => plain_text(runs).trim().is_empty(),
            SectionBody::OrderedList(items) | SectionBody::UnorderedList(items) => {
                items.iter().all(|item| plain_text(item).trim().is_empty())
            }
            SectionBody::TwoColumn { left, right } => {
                left.items.is_empty() && right.items.is_empty()
            }
            SectionBody::CodeBlock(text) => text.trim().is_empty(),
        }
    }
}

/// How a note is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteTone {
    /// Small muted caption under the body
    Caption,
    /// Practical advice
    Tip,
}

/// A short remark attached after a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    pub text: RichText,
    pub tone: NoteTone,
}

/// One titled block of static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section heading
    pub title: &'static str,
    /// Paragraph shown before the body
    pub intro: Option<RichText>,
    /// Main content
    pub body: SectionBody,
    /// Remark shown after the body
    pub note: Option<Note>,
}

impl Section {
    /// Anchor id derived from the title.
    pub fn id(&self) -> String {
        slugify(self.title)
    }
}

/// Page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Closing block after the last section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub lead: &'static str,
    pub items: &'static [RichText],
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// The complete document: header, ordered sections, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: Header,
    pub sections: &'static [Section],
    pub footer: Footer,
}

impl Document {
    /// Section titles in document order.
    pub fn section_titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }

    /// Look up a section by its exact title.
    pub fn section(&self, title: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Table of contents: section headings at level 2, column headings at level 3.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();

        for section in self.sections {
            entries.push(OutlineEntry {
                title: section.title.to_string(),
                id: section.id(),
                level: 2,
            });

            if let SectionBody::TwoColumn { left, right } = section.body {
                for column in [left, right] {
                    entries.push(OutlineEntry {
                        title: column.title.to_string(),
                        id: slugify(column.title),
                        level: 3,
                    });
                }
            }
        }

        entries
    }
}

/// Convert a heading to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ITEMS: &[RichText] = &[
        &[Inline::Strong("One"), Inline::Text(" - first")],
        &[Inline::Text("Two")],
    ];

    static SAMPLE: Document = Document {
        header: Header {
            title: "Sample",
            tagline: "Draft",
        },
        sections: &[
            Section {
                title: "Overview",
                intro: None,
                body: SectionBody::Paragraph(&[Inline::Text("Hello")]),
                note: None,
            },
            Section {
                title: "Layout & Tools",
                intro: None,
                body: SectionBody::TwoColumn {
                    left: Column {
                        title: "Left side",
                        items: ITEMS,
                    },
                    right: Column {
                        title: "Right side",
                        items: &[],
                    },
                },
                note: None,
            },
        ],
        footer: Footer {
            lead: "Bye",
            items: &[],
        },
    };

    #[test]
    fn plain_text_drops_markup() {
        assert_eq!(plain_text(ITEMS[0]), "One - first");
    }

    #[test]
    fn counts_items() {
        assert_eq!(SectionBody::OrderedList(ITEMS).item_count(), Some(2));
        assert_eq!(SectionBody::CodeBlock("x").item_count(), None);
        assert_eq!(SAMPLE.sections[1].body.item_count(), Some(2));
    }

    #[test]
    fn detects_empty_bodies() {
        assert!(SectionBody::CodeBlock("  \n").is_empty());
        assert!(SectionBody::UnorderedList(&[]).is_empty());
        assert!(SectionBody::Paragraph(&[Inline::Text(" ")]).is_empty());
        assert!(!SectionBody::OrderedList(ITEMS).is_empty());
    }

    #[test]
    fn builds_outline() {
        let outline = SAMPLE.outline();

        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0].id, "overview");
        assert_eq!(outline[0].level, 2);
        assert_eq!(outline[1].id, "layout-tools");
        assert_eq!(outline[2].title, "Left side");
        assert_eq!(outline[2].level, 3);
    }

    #[test]
    fn finds_sections_by_title() {
        assert_eq!(SAMPLE.section_titles(), vec!["Overview", "Layout & Tools"]);
        assert!(SAMPLE.section("Overview").is_some());
        assert!(SAMPLE.section("Missing").is_none());
    }

    #[test]
    fn serializes_tagged_bodies() {
        let json = serde_json::to_value(SAMPLE.sections[0]).unwrap();

        assert_eq!(json["body"]["kind"], "paragraph");
        assert_eq!(json["body"]["content"][0]["kind"], "text");
        assert_eq!(json["body"]["content"][0]["text"], "Hello");
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(
            slugify("Planned simulations (co-simulation)"),
            "planned-simulations-co-simulation"
        );
        assert_eq!(slugify("Example experiments & metrics"), "example-experiments-metrics");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
