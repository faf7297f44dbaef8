use std::cell::RefCell;

use form_autofill::dom::dom_model::{Document, DomError, EventKind, NodeId};
use form_autofill::dom::writer::{NativeWriter, PlatformAccessor, ValueAccessor};
use serde_json::json;

use crate::common::{by_id, labeled_select, page, radio, radio_by_value};

mod common;

fn controlled_input() -> Document {
    page(json!([
        { "tag": "input", "attrs": { "id": "first", "type": "text" }, "framework": true }
    ]))
}

// =========================================================================
// Framework-controlled inputs
// =========================================================================

#[test]
fn element_level_assignment_is_invisible_to_the_framework() {
    let mut doc = controlled_input();
    let el = by_id(&doc, "first");

    doc.assign_value(el, "Jane").unwrap();
    doc.dispatch(el, EventKind::Input);

    assert_eq!(doc.value(el), Some("Jane"));
    assert!(doc.framework_updates.is_empty(), "tracker already saw the value");
}

#[test]
fn native_write_reaches_the_framework() {
    let mut doc = controlled_input();
    let el = by_id(&doc, "first");

    NativeWriter::platform().write_value(&mut doc, el, "Jane").unwrap();

    assert_eq!(doc.value(el), Some("Jane"));
    assert_eq!(doc.framework_updates.len(), 1);
    assert_eq!(doc.framework_updates[0].event, EventKind::Input);
    assert_eq!(doc.framework_updates[0].value, "Jane");
}

#[test]
fn text_inputs_get_input_then_change() {
    let mut doc = controlled_input();
    let el = by_id(&doc, "first");

    NativeWriter::platform().write_value(&mut doc, el, "Jane").unwrap();

    assert_eq!(doc.events_for(el), vec![EventKind::Input, EventKind::Change]);
    assert!(doc.events.iter().all(|e| e.bubbles));
}

// =========================================================================
// Selects
// =========================================================================

#[test]
fn select_write_needs_an_exact_option_value() {
    let mut doc = page(json!([labeled_select(
        "state",
        "State",
        &[("", "Select..."), ("NSW", "New South Wales"), ("VIC", "Victoria")]
    )]));
    let el = by_id(&doc, "state");
    let writer = NativeWriter::platform();

    assert_eq!(doc.value(el), Some(""), "first option selected by default");

    writer.write_value(&mut doc, el, "VIC").unwrap();
    assert_eq!(doc.value(el), Some("VIC"));
    assert_eq!(doc.events_for(el), vec![EventKind::Change], "selects only get change");

    writer.write_value(&mut doc, el, "Victoria").unwrap();
    assert_eq!(doc.value(el), Some(""), "display text is not a value");
}

#[test]
fn selected_attribute_seeds_select_value() {
    let doc = page(json!([
        { "tag": "select", "attrs": { "id": "s" }, "children": [
            { "tag": "option", "attrs": { "value": "a" }, "children": ["A"] },
            { "tag": "option", "attrs": { "value": "b", "selected": "" }, "children": ["B"] }
        ] }
    ]));

    assert_eq!(doc.value(by_id(&doc, "s")), Some("b"));
}

// =========================================================================
// Radios
// =========================================================================

#[test]
fn checking_a_radio_unchecks_its_group() {
    let mut doc = page(json!([
        { "tag": "form", "children": [
            radio("gender", "M", "Male"),
            radio("gender", "F", "Female")
        ] },
        { "tag": "form", "children": [radio("gender", "M", "Male")] }
    ]));
    let male = radio_by_value(&doc, "gender", "M");
    let female = radio_by_value(&doc, "gender", "F");
    let other_form_male = doc
        .elements()
        .filter(|e| doc.attr(*e, "value") == Some("M"))
        .nth(1)
        .unwrap();
    let writer = NativeWriter::platform();

    writer.check(&mut doc, male).unwrap();
    writer.check(&mut doc, other_form_male).unwrap();
    writer.check(&mut doc, female).unwrap();

    assert!(doc.is_checked(female));
    assert!(!doc.is_checked(male));
    assert!(doc.is_checked(other_form_male), "different form, different group");
    assert_eq!(doc.events_for(female), vec![EventKind::Change]);
}

#[test]
fn unknown_node_is_an_error() {
    let mut doc = controlled_input();
    let err = NativeWriter::platform()
        .write_value(&mut doc, NodeId(999), "x")
        .unwrap_err();
    assert_eq!(err, DomError::UnknownNode(NodeId(999)));
}

// =========================================================================
// Custom accessor
// =========================================================================

#[derive(Default)]
struct RecordingAccessor {
    calls: RefCell<Vec<String>>,
}

impl ValueAccessor for RecordingAccessor {
    fn set_value(&self, doc: &mut Document, el: NodeId, value: &str) -> Result<(), DomError> {
        self.calls.borrow_mut().push(format!("value {} {}", el.0, value));
        PlatformAccessor.set_value(doc, el, value)
    }

    fn set_checked(&self, doc: &mut Document, el: NodeId, checked: bool) -> Result<(), DomError> {
        self.calls.borrow_mut().push(format!("checked {} {}", el.0, checked));
        PlatformAccessor.set_checked(doc, el, checked)
    }
}

#[test]
fn writer_goes_through_the_injected_accessor() {
    let mut doc = controlled_input();
    let el = by_id(&doc, "first");
    let writer = NativeWriter::new(RecordingAccessor::default());

    writer.write_value(&mut doc, el, "Jane").unwrap();

    let calls = writer_calls(&writer);
    assert_eq!(calls, vec![format!("value {} Jane", el.0)]);
    assert_eq!(doc.value(el), Some("Jane"));
}

fn writer_calls(writer: &NativeWriter<RecordingAccessor>) -> Vec<String> {
    writer.accessor().calls.borrow().clone()
}
