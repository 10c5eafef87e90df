//! GraphML input and output.
//!
//! Succession diagrams arrive as GraphML documents whose nodes carry a string
//! attribute named `label` holding the motif text (`{k1:v1, ...}` with `0`/`1`
//! values); edges carry only topology. The reduction core never touches files;
//! these collaborators convert between the markup and the in-memory structures
//! at the boundary of the tool.
//!
//! The reader accepts both the declared-key form produced by common graph
//! libraries (`<key id="d0" for="node" attr.name="label"/>` plus
//! `<data key="d0">`) and a plain `label` attribute directly on the node.
//! The writer always emits the declared-key form.

use std::fs;
use std::path::Path;

use log::info;
use roxmltree::{Document, Node as XmlNode};

use crate::diagram::{ReducedDiagram, SuccessionDiagram};
use crate::error::ReduceError;
use crate::motif::Motif;


/// The node attribute holding motif labels.
const LABEL_ATTRIBUTE: &str = "label";

/// Parse a GraphML document into a [`SuccessionDiagram`].
///
/// Every node must have an id and a label; labels are parsed as motifs. Nodes
/// without a label are an error, never silently skipped.
pub fn read_graphml(text: &str) -> Result<SuccessionDiagram, ReduceError> {
    let document = Document::parse(text)?;

    // GraphML declares node attributes up front; collect every key id bound
    // to the `label` attribute of nodes. Comparisons use local names only, so
    // documents with or without the GraphML namespace both work.
    let label_keys: Vec<&str> = document
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "key")
        .filter(|n| n.attribute("attr.name") == Some(LABEL_ATTRIBUTE))
        .filter(|n| n.attribute("for").is_none_or(|target| target == "node"))
        .filter_map(|n| n.attribute("id"))
        .collect();

    let mut diagram = SuccessionDiagram::new();

    for node in elements(&document, "node") {
        let id = node
            .attribute("id")
            .ok_or_else(|| ReduceError::MalformedDocument {
                reason: "found a <node> element without an id".to_string(),
            })?;
        let label = node_label(&node, &label_keys).ok_or_else(|| ReduceError::MissingLabel {
            node: id.to_string(),
        })?;
        let motif = Motif::parse(label).map_err(|parse| ReduceError::LabelFormat {
            node: id.to_string(),
            label: label.to_string(),
            reason: parse.to_string(),
        })?;
        diagram.add_motif(id, motif)?;
    }

    for edge in elements(&document, "edge") {
        let source = edge
            .attribute("source")
            .ok_or_else(|| ReduceError::MalformedDocument {
                reason: "found an <edge> element without a source".to_string(),
            })?;
        let target = edge
            .attribute("target")
            .ok_or_else(|| ReduceError::MalformedDocument {
                reason: "found an <edge> element without a target".to_string(),
            })?;
        diagram.add_transition(source, target)?;
    }

    info!(
        "Loaded diagram with {} motifs and {} transitions.",
        diagram.node_count(),
        diagram.edge_count()
    );
    Ok(diagram)
}

fn elements<'a, 'input>(
    document: &'a Document<'input>,
    name: &'a str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
    document
        .descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn node_label<'a>(node: &XmlNode<'a, '_>, label_keys: &[&str]) -> Option<&'a str> {
    for data in node
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "data")
    {
        let Some(key) = data.attribute("key") else {
            continue;
        };
        if key == LABEL_ATTRIBUTE || label_keys.contains(&key) {
            return Some(data.text().unwrap_or(""));
        }
    }
    node.attribute(LABEL_ATTRIBUTE)
}

/// Serialize a reduced diagram as a GraphML document.
///
/// Class nodes are written with their `class:<index>` ids and formula labels;
/// retained nodes keep their original ids and canonical motif labels. Output
/// order follows the diagram's node and edge order, so equal diagrams produce
/// byte-identical documents.
pub fn to_graphml_string(diagram: &ReducedDiagram) -> String {
    let mut text = String::new();
    text.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    text.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
    text.push_str("  <key id=\"d0\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>\n");
    text.push_str("  <graph edgedefault=\"directed\">\n");

    for node in diagram.node_indices() {
        let payload = diagram.node(node);
        text.push_str(&format!(
            "    <node id=\"{}\">\n      <data key=\"d0\">{}</data>\n    </node>\n",
            escape(&payload.display_id()),
            escape(&payload.label())
        ));
    }
    for (from, to) in diagram.edges() {
        text.push_str(&format!(
            "    <edge source=\"{}\" target=\"{}\"/>\n",
            escape(&diagram.node(from).display_id()),
            escape(&diagram.node(to).display_id())
        ));
    }

    text.push_str("  </graph>\n");
    text.push_str("</graphml>\n");
    text
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Load a succession diagram from a GraphML file.
pub fn load_diagram(path: impl AsRef<Path>) -> Result<SuccessionDiagram, ReduceError> {
    let text = fs::read_to_string(path)?;
    read_graphml(&text)
}

/// Write a reduced diagram to a GraphML file.
pub fn save_reduction(path: impl AsRef<Path>, diagram: &ReducedDiagram) -> Result<(), ReduceError> {
    fs::write(path, to_graphml_string(diagram))?;
    Ok(())
}
