// WHY: minimal view of a finalized documentation tree
// Only direct children and their command/content are read by the detector

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Command tag marking a node as a top-level section
pub const TOP_LEVEL_SECTION: &str = "head1";

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Role of the node within the structure (e.g. `head1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Text carried by the node; header text for sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Nested nodes, never inspected by the detector
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Top-level section node with the given header text
    pub fn section(header: impl Into<String>) -> Self {
        Self::command(TOP_LEVEL_SECTION, header)
    }

    pub fn command(command: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    /// Untagged text node
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            command: None,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn is_top_level_section(&self) -> bool {
        self.command.as_deref() == Some(TOP_LEVEL_SECTION)
    }

    /// Content of the node, treating missing content as empty
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Ordered sequence of child nodes owned by the host pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Header texts of direct children marked as top-level sections, in document order
    /// Each item carries the child index for diagnostics
    pub fn top_level_headers(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_top_level_section())
            .map(|(index, node)| (index, node.content_or_empty()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse document JSON")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize document")
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_headers_skip_other_nodes() {
        let document: Document = vec![
            Node::section("NAME"),
            Node::text("sectionguard - keeps sections unique"),
            Node::command("head2", "NAME"),
            Node::section("SYNOPSIS").with_children(vec![Node::section("NESTED")]),
        ]
        .into_iter()
        .collect();

        let headers: Vec<_> = document.top_level_headers().collect();
        assert_eq!(headers, vec![(0, "NAME"), (3, "SYNOPSIS")]);
    }

    #[test]
    fn test_missing_content_reads_as_empty() {
        let node = Node {
            command: Some(TOP_LEVEL_SECTION.to_string()),
            content: None,
            children: Vec::new(),
        };
        assert!(node.is_top_level_section());
        assert_eq!(node.content_or_empty(), "");
    }

    #[test]
    fn test_json_defaults_for_missing_fields() {
        let json = r#"{"children": [{"command": "head1"}, {"content": "plain text"}]}"#;
        let document = Document::from_json_str(json).expect("document should parse");

        assert_eq!(document.children.len(), 2);
        assert_eq!(document.children[0].content_or_empty(), "");
        assert!(!document.children[1].is_top_level_section());

        let empty = Document::from_json_str("{}").expect("empty document should parse");
        assert!(empty.children.is_empty());
    }

    #[test]
    fn test_json_output_parses_back() {
        let mut document = Document::new();
        document.push(Node::section("AUTHOR").with_children(vec![Node::text("stevejs")]));

        let json = document.to_json_pretty().expect("serialization should succeed");
        assert!(json.contains("\"head1\""));
        assert_eq!(Document::from_json_str(&json).expect("should parse"), document);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Document::from_json_str("[not a document").unwrap_err();
        assert!(err.to_string().contains("Failed to parse document JSON"));
    }
}
