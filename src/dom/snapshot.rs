use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{Document, ElementData, NodeId, NodeKind};

// ============================================================================
// Page snapshot (JSON) -> Document
// ============================================================================

/// Serialized page as produced by a DOM extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Vec<SnapshotNode>,
}

/// A text node is a bare JSON string; everything else is an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Text(String),
    Element(SnapshotElement),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,

    /// Live value when it differs from the `value` attribute.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default = "default_true")]
    pub rendered: bool,

    /// Page uses a framework that tracks this control's value.
    #[serde(default)]
    pub framework: bool,
}

fn default_true() -> bool {
    true
}

impl PageSnapshot {
    pub fn into_document(self) -> Document {
        let mut doc = Document::new(self.url.as_deref(), &self.title);
        let mut tracked = Vec::new();

        for node in self.body {
            append(&mut doc, None, node, &mut tracked);
        }

        seed_select_values(&mut doc);

        for id in tracked {
            // Only element ids were collected
            let _ = doc.install_value_tracker(id);
        }

        doc
    }
}

impl Document {
    /// Parse a JSON page snapshot.
    pub fn from_json(json: &str) -> Result<Document, serde_json::Error> {
        let snapshot: PageSnapshot = serde_json::from_str(json)?;
        Ok(snapshot.into_document())
    }

    /// Build from an already-parsed JSON value (handy with `serde_json::json!`).
    pub fn from_value(value: serde_json::Value) -> Result<Document, serde_json::Error> {
        let snapshot: PageSnapshot = serde_json::from_value(value)?;
        Ok(snapshot.into_document())
    }
}

fn append(
    doc: &mut Document,
    parent: Option<NodeId>,
    node: SnapshotNode,
    tracked: &mut Vec<NodeId>,
) {
    match node {
        SnapshotNode::Text(text) => {
            doc.push(parent, NodeKind::Text(text));
        }
        SnapshotNode::Element(el) => {
            let mut data = ElementData::new(&el.tag);
            data.rendered = el.rendered;
            data.checked = el.checked.unwrap_or_else(|| {
                el.attrs.contains_key("checked") || el.attrs.contains_key("selected")
            });
            data.value = match (&el.value, el.attrs.get("value")) {
                (Some(live), _) => live.clone(),
                (None, Some(attr)) => attr.clone(),
                (None, None) => String::new(),
            };
            data.attributes = el.attrs;

            let id = doc.push(parent, NodeKind::Element(data));
            if el.framework {
                tracked.push(id);
            }

            for child in el.children {
                append(doc, Some(id), child, tracked);
            }
        }
    }
}

/// A select's value is its selected option's value, defaulting to the first option.
fn seed_select_values(doc: &mut Document) {
    let selects: Vec<NodeId> = doc.elements().filter(|e| doc.tag(*e) == Some("select")).collect();

    for select in selects {
        let options = doc.option_nodes(select);
        let value = match doc.value(select).filter(|v| !v.is_empty()) {
            Some(live) => Some(live.to_string()),
            None => options
                .iter()
                .copied()
                .find(|o| doc.is_checked(*o))
                .or_else(|| options.first().copied())
                .map(|opt| doc.option_value(opt)),
        };

        if let Some(value) = value {
            // `select` came from `elements()`, so it is a known element
            let _ = doc.store_platform_value(select, &value);
        }
    }
}
