use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ============================================================================
// In-memory document tree
// ============================================================================

/// Index of a node inside a `Document` arena.
///
/// Nodes are stored in document (pre-)order, so comparing two ids compares
/// their position in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,

    /// Platform value slot (what the browser holds for `.value`).
    pub value: String,
    pub checked: bool,

    /// False when the element is not laid out (display:none and friends).
    pub rendered: bool,

    /// Last value seen by a framework's controlled-input tracker, if one is installed.
    pub tracker: Option<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attributes: BTreeMap::new(),
            value: String::new(),
            checked: false,
            rendered: true,
            tracker: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Lowercased `type` attribute; inputs without one are text inputs.
    pub fn input_type(&self) -> Option<String> {
        if self.tag != "input" {
            return None;
        }
        Some(
            self.attr("type")
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "text".to_string()),
        )
    }

    pub fn has_class_fragment(&self, fragment: &str) -> bool {
        self.attr("class").is_some_and(|c| c.contains(fragment))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
}

/// A dispatched DOM event. All events the writer fires bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomEvent {
    pub target: NodeId,
    pub kind: EventKind,
    pub bubbles: bool,
}

/// State change a framework tracker picked up while handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkUpdate {
    pub target: NodeId,
    pub event: EventKind,
    pub value: String,
}

/// `(value, display text)` pair of a `<select>` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// An element id that cannot be used in a relationship lookup.
    MalformedId(String),

    /// A node id that does not belong to this document or is not an element.
    UnknownNode(NodeId),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::MalformedId(id) => write!(f, "Malformed element id: {:?}", id),
            DomError::UnknownNode(id) => write!(f, "No element with node id {}", id.0),
        }
    }
}

impl std::error::Error for DomError {}

/// An owned page: an arena of nodes plus the event log of everything
/// dispatched against it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub url: Option<String>,
    pub title: String,
    pub nodes: Vec<Node>,
    pub roots: Vec<NodeId>,
    pub events: Vec<DomEvent>,
    pub framework_updates: Vec<FrameworkUpdate>,
}

impl Document {
    pub fn new(url: Option<&str>, title: &str) -> Self {
        Self {
            url: url.map(|u| u.to_string()),
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Append a node under `parent` (or as a top-level node). Callers must add
    /// nodes in document order.
    pub fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: vec![],
            kind,
        });

        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(el)) => Ok(el),
            _ => Err(DomError::UnknownNode(id)),
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent?;
        self.element(parent).map(|_| parent)
    }

    /// All element ids, in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n.kind, NodeKind::Element(_)))
            .map(|(i, _)| NodeId(i))
    }

    // ------------------------------------------------------------------------
    // Value access
    // ------------------------------------------------------------------------

    /// Platform value slot of an element.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.value.as_str())
    }

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|el| el.checked)
    }

    /// Install a controlled-input tracker on `id`, seeded with its current value.
    pub fn install_value_tracker(&mut self, id: NodeId) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        el.tracker = Some(el.value.clone());
        Ok(())
    }

    /// Element-level assignment: the path a page script takes with
    /// `el.value = x`. When a framework tracker is installed its override sees
    /// the write too, so the tracker moves along with the value.
    pub fn assign_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        self.store_platform_value(id, value)?;
        let el = self.element_mut(id)?;
        if el.tracker.is_some() {
            el.tracker = Some(el.value.clone());
        }
        Ok(())
    }

    /// Write the platform value slot directly, leaving any tracker untouched.
    ///
    /// For a `<select>` this selects the option whose value matches exactly;
    /// with no such option nothing is selected and the value becomes empty.
    pub fn store_platform_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        let is_select = self.tag(id) == Some("select");
        if !is_select {
            self.element_mut(id)?.value = value.to_string();
            return Ok(());
        }

        let options = self.option_nodes(id);
        let mut selected = None;
        for opt in &options {
            let matches = selected.is_none() && self.option_value(*opt) == value;
            if matches {
                selected = Some(*opt);
            }
            self.element_mut(*opt)?.checked = matches;
        }

        self.element_mut(id)?.value = match selected {
            Some(_) => value.to_string(),
            None => String::new(),
        };
        Ok(())
    }

    pub fn store_platform_checked(&mut self, id: NodeId, checked: bool) -> Result<(), DomError> {
        self.element_mut(id)?.checked = checked;
        Ok(())
    }

    /// Record an event and let any tracker on the target reconcile.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) {
        self.events.push(DomEvent {
            target,
            kind,
            bubbles: true,
        });

        let Ok(el) = self.element_mut(target) else {
            return;
        };

        let observed = match el.input_type().as_deref() {
            Some("radio") | Some("checkbox") => el.checked.to_string(),
            _ => el.value.clone(),
        };

        let stale = match &el.tracker {
            Some(last) => *last != observed,
            None => false,
        };

        if stale {
            el.tracker = Some(observed.clone());
            self.framework_updates.push(FrameworkUpdate {
                target,
                event: kind,
                value: observed,
            });
        }
    }

    pub fn events_for(&self, target: NodeId) -> Vec<EventKind> {
        self.events
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.kind)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Select options
    // ------------------------------------------------------------------------

    /// `<option>` descendants of a select (including those inside optgroups).
    pub fn option_nodes(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|id| self.tag(*id) == Some("option"))
            .collect()
    }

    /// Option value: the `value` attribute, or the collapsed text when absent.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(v) => v.to_string(),
            None => self.option_text(option),
        }
    }

    pub fn option_text(&self, option: NodeId) -> String {
        self.text_content(option)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn select_options(&self, select: NodeId) -> Vec<SelectOption> {
        self.option_nodes(select)
            .into_iter()
            .map(|opt| SelectOption {
                value: self.option_value(opt),
                text: self.option_text(opt),
            })
            .collect()
    }

    /// Short human-readable description, e.g. `input#first_name` or
    /// `select[name=state]`.
    pub fn describe(&self, id: NodeId) -> String {
        let Some(el) = self.element(id) else {
            return format!("#text@{}", id.0);
        };

        if let Some(dom_id) = el.attr("id").filter(|v| !v.is_empty()) {
            return format!("{}#{}", el.tag, dom_id);
        }
        if let Some(name) = el.attr("name").filter(|v| !v.is_empty()) {
            return format!("{}[name={}]", el.tag, name);
        }
        format!("{}@{}", el.tag, id.0)
    }
}
