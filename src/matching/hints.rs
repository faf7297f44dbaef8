use crate::dom::dom_model::{Document, NodeId};

/// Attributes read straight off the element, in order.
const DIRECT_ATTRIBUTES: [&str; 5] = ["name", "id", "placeholder", "title", "aria-label"];

/// Class fragments marking a "field group" wrapper.
const GROUP_CLASS_FRAGMENTS: [&str; 4] = ["group", "field-wrap", "field-container", "form-item"];

/// Gather every text clue attached to a form control.
///
/// Order follows the sources below; duplicates are kept. A lookup that cannot
/// run (for example a malformed id) contributes nothing.
pub fn collect_hints(doc: &Document, el: NodeId) -> Vec<String> {
    let mut hints = Vec::new();

    let Some(element) = doc.element(el) else {
        return hints;
    };

    // 1. Direct attributes
    for attr in DIRECT_ATTRIBUTES {
        if let Some(v) = element.attr(attr).filter(|v| !v.is_empty()) {
            hints.push(v.to_string());
        }
    }

    // 2. aria-labelledby (space separated id list)
    if let Some(labelled_by) = element.attr("aria-labelledby") {
        for ref_id in labelled_by.split_whitespace() {
            if let Some(target) = doc.get_element_by_id(ref_id) {
                hints.push(doc.text_content(target));
            }
        }
    }

    // 3. <label for="...">
    if let Some(dom_id) = element.attr("id").filter(|v| !v.is_empty()) {
        if let Ok(Some(label)) = doc.label_for(dom_id) {
            hints.push(doc.text_content(label));
        }
    }

    // 4. Wrapping <label>
    if let Some(label) = doc.closest(el, |e| e.tag == "label") {
        hints.push(doc.text_content(label));
    }

    // 5. Label elsewhere in the same parent
    let parent = doc.parent_element(el);
    if let Some(parent) = parent {
        if let Some(label) = doc.find_descendant(parent, |e| e.tag == "label") {
            if !doc.contains(label, el) {
                hints.push(doc.text_content(label));
            }
        }
    }

    // 6. Enclosing fieldset legend
    if let Some(fieldset) = doc.closest(el, |e| e.tag == "fieldset") {
        if let Some(legend) = doc.child_with_tag(fieldset, "legend") {
            hints.push(doc.text_content(legend));
        }
    }

    // 7. Field-group wrapper with its own label or title
    let group = doc.closest(el, |e| {
        GROUP_CLASS_FRAGMENTS.iter().any(|frag| e.has_class_fragment(frag))
    });
    if let Some(group) = group {
        if Some(group) != parent {
            let heading = doc.find_descendant(group, |e| {
                e.tag == "label" || e.has_class_fragment("label") || e.has_class_fragment("title")
            });
            if let Some(heading) = heading {
                if !doc.contains(heading, el) {
                    hints.push(doc.text_content(heading));
                }
            }
        }
    }

    hints
}
