//! JSON rendering of the document model.

use thesis_doc_content::Document;

use crate::traits::{Format, RenderError, Renderer};

/// Serializes the typed document, so other tools can consume the same structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> Format {
        Format::Json
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        let mut json = serde_json::to_string_pretty(doc)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use thesis_doc_content::document;

    #[test]
    fn exposes_tagged_section_bodies() {
        let json: Value = serde_json::from_str(&JsonRenderer.render(document()).unwrap()).unwrap();
        let sections = json["sections"].as_array().unwrap();

        let kinds: Vec<&str> = sections
            .iter()
            .map(|s| s["body"]["kind"].as_str().unwrap())
            .collect();

        assert_eq!(
            kinds,
            vec![
                "paragraph",
                "ordered_list",
                "two_column",
                "unordered_list",
                "unordered_list",
                "code_block",
                "ordered_list",
            ]
        );
        assert_eq!(json["header"]["title"], "Agentic AI — Thesis Project");
        assert_eq!(sections[1]["body"]["content"].as_array().unwrap().len(), 8);
        assert_eq!(sections[2]["note"]["tone"], "caption");
        assert_eq!(sections[0]["intro"], Value::Null);
    }
}
