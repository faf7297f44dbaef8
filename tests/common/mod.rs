#![allow(dead_code)]

use form_autofill::dom::dom_model::{Document, NodeId};
use serde_json::{Value, json};

/// Build a document from the `body` node list of a snapshot.
pub fn page(body: Value) -> Document {
    page_at("https://example.com/apply", body)
}

pub fn page_at(url: &str, body: Value) -> Document {
    Document::from_value(json!({ "url": url, "title": "Application", "body": body }))
        .expect("fixture snapshot should parse")
}

/// `<div><label for=id>label</label><input id=id type=...></div>`
pub fn labeled_input(id: &str, label: &str, input_type: &str) -> Value {
    json!({
        "tag": "div",
        "children": [
            { "tag": "label", "attrs": { "for": id }, "children": [label] },
            { "tag": "input", "attrs": { "id": id, "type": input_type } }
        ]
    })
}

/// `<div><label for=id>label</label><select id=id>options</select></div>`
pub fn labeled_select(id: &str, label: &str, options: &[(&str, &str)]) -> Value {
    let options: Vec<Value> = options
        .iter()
        .map(|(value, text)| {
            json!({ "tag": "option", "attrs": { "value": value }, "children": [text] })
        })
        .collect();

    json!({
        "tag": "div",
        "children": [
            { "tag": "label", "attrs": { "for": id }, "children": [label] },
            { "tag": "select", "attrs": { "id": id }, "children": options }
        ]
    })
}

/// `<label><input type=radio name=name value=value> text</label>`
pub fn radio(name: &str, value: &str, text: &str) -> Value {
    json!({
        "tag": "label",
        "children": [
            { "tag": "input", "attrs": { "type": "radio", "name": name, "value": value } },
            text
        ]
    })
}

/// First element carrying `id="..."`.
pub fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has no element #{}", id))
}

/// Radio input with the given name and value attribute.
pub fn radio_by_value(doc: &Document, name: &str, value: &str) -> NodeId {
    doc.elements()
        .find(|e| doc.attr(*e, "name") == Some(name) && doc.attr(*e, "value") == Some(value))
        .unwrap_or_else(|| panic!("fixture has no radio {}={}", name, value))
}
