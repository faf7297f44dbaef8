use crate::dom::dom_model::{Document, DomError, ElementData, NodeId, NodeKind};

// ============================================================================
// Tree traversal and relationship lookups
// ============================================================================

impl Document {
    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(id) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(n) = self.node(next) {
                stack.extend(n.children.iter().rev().copied());
            }
        }

        out
    }

    /// Nearest element, starting at `id` itself and walking up, that satisfies `pred`.
    pub fn closest<F>(&self, id: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        let mut current = Some(id);
        while let Some(cur) = current {
            if let Some(el) = self.element(cur) {
                if pred(el) {
                    return Some(cur);
                }
            }
            current = self.node(cur).and_then(|n| n.parent);
        }
        None
    }

    /// First descendant element (document order) that satisfies `pred`.
    pub fn find_descendant<F>(&self, id: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        self.descendants(id)
            .into_iter()
            .find(|d| self.element(*d).is_some_and(&pred))
    }

    /// Whether `other` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: NodeId, other: NodeId) -> bool {
        let mut current = Some(other);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.node(cur).and_then(|n| n.parent);
        }
        false
    }

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };

        if let NodeKind::Text(t) = &node.kind {
            return t.clone();
        }

        self.descendants(id)
            .into_iter()
            .filter_map(|d| match &self.node(d)?.kind {
                NodeKind::Text(t) => Some(t.as_str()),
                NodeKind::Element(_) => None,
            })
            .collect()
    }

    /// First element in the document carrying `id="..."`.
    pub fn get_element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        if dom_id.is_empty() {
            return None;
        }
        self.elements().find(|e| self.attr(*e, "id") == Some(dom_id))
    }

    /// First `<label for="...">` pointing at `dom_id`.
    ///
    /// Ids that are empty or contain ASCII whitespace are rejected rather than
    /// matched loosely.
    pub fn label_for(&self, dom_id: &str) -> Result<Option<NodeId>, DomError> {
        if dom_id.trim().is_empty() || dom_id.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(DomError::MalformedId(dom_id.to_string()));
        }

        Ok(self
            .elements()
            .find(|e| self.tag(*e) == Some("label") && self.attr(*e, "for") == Some(dom_id)))
    }

    /// Direct element children of `id` with the given tag.
    pub fn child_with_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.node(id)?
            .children
            .iter()
            .copied()
            .find(|c| self.tag(*c) == Some(tag))
    }

    /// Whether the element takes part in layout: neither it nor any ancestor
    /// is flagged unrendered or carries the `hidden` attribute.
    pub fn is_laid_out(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if let Some(el) = self.element(cur) {
                if !el.rendered || el.attr("hidden").is_some() {
                    return false;
                }
            }
            current = self.node(cur).and_then(|n| n.parent);
        }
        true
    }

    /// Nearest enclosing `<form>`, if any.
    pub fn form_of(&self, id: NodeId) -> Option<NodeId> {
        self.closest(id, |el| el.tag == "form")
    }
}
