use form_autofill::matching::hints::collect_hints;
use serde_json::json;

use crate::common::{by_id, page};

mod common;

// =========================================================================
// Individual hint sources
// =========================================================================

#[test]
fn direct_attributes_come_first_in_fixed_order() {
    let doc = page(json!([
        { "tag": "input", "attrs": {
            "aria-label": "Aria", "title": "Title", "placeholder": "Placeholder",
            "id": "the_id", "name": "the_name"
        } }
    ]));
    let el = by_id(&doc, "the_id");

    let hints = collect_hints(&doc, el);
    assert_eq!(
        &hints[..5],
        &["the_name", "the_id", "Placeholder", "Title", "Aria"],
        "name, id, placeholder, title, aria-label"
    );
}

#[test]
fn empty_attributes_contribute_nothing() {
    let doc = page(json!([
        { "tag": "input", "attrs": { "id": "x", "name": "", "placeholder": "" } }
    ]));
    let hints = collect_hints(&doc, by_id(&doc, "x"));
    assert_eq!(hints, vec!["x".to_string()]);
}

#[test]
fn aria_labelledby_resolves_every_referenced_id() {
    let doc = page(json!([
        { "tag": "span", "attrs": { "id": "a" }, "children": ["Gross"] },
        { "tag": "span", "attrs": { "id": "b" }, "children": ["Annual Income"] },
        { "tag": "input", "attrs": { "id": "inc", "aria-labelledby": "a  missing b" } }
    ]));

    let hints = collect_hints(&doc, by_id(&doc, "inc"));
    assert!(hints.contains(&"Gross".to_string()));
    assert!(hints.contains(&"Annual Income".to_string()));
}

#[test]
fn label_for_and_wrapping_label_are_collected() {
    let doc = page(json!([
        { "tag": "label", "attrs": { "for": "email" }, "children": ["Email address"] },
        { "tag": "section", "children": [
            { "tag": "label", "children": [
                "Mobile ",
                { "tag": "input", "attrs": { "id": "phone" } }
            ] }
        ] },
        { "tag": "section", "children": [
            { "tag": "input", "attrs": { "id": "email" } }
        ] }
    ]));

    let email = collect_hints(&doc, by_id(&doc, "email"));
    assert!(email.contains(&"Email address".to_string()), "label[for] text");

    let phone = collect_hints(&doc, by_id(&doc, "phone"));
    assert!(phone.contains(&"Mobile ".to_string()), "ancestor label text");
}

#[test]
fn sibling_label_in_same_parent_is_collected() {
    let doc = page(json!([
        { "tag": "div", "children": [
            { "tag": "span", "children": [ { "tag": "label", "children": ["Postcode"] } ] },
            { "tag": "input", "attrs": { "name": "pc" } }
        ] }
    ]));
    let el = doc.elements().find(|e| doc.attr(*e, "name") == Some("pc")).unwrap();

    let hints = collect_hints(&doc, el);
    assert!(hints.contains(&"Postcode".to_string()));
}

#[test]
fn fieldset_legend_reaches_nested_inputs() {
    let doc = page(json!([
        { "tag": "fieldset", "children": [
            { "tag": "legend", "children": ["Date of Birth"] },
            { "tag": "div", "children": [
                { "tag": "input", "attrs": { "id": "d", "placeholder": "DD" } }
            ] }
        ] }
    ]));

    let hints = collect_hints(&doc, by_id(&doc, "d"));
    assert_eq!(hints, vec!["d", "DD", "Date of Birth"]);
}

#[test]
fn field_group_heading_is_used_when_group_is_not_the_parent() {
    let doc = page(json!([
        { "tag": "div", "attrs": { "class": "form-group" }, "children": [
            { "tag": "span", "attrs": { "class": "field-title" }, "children": ["Employer name"] },
            { "tag": "div", "attrs": { "class": "control" }, "children": [
                { "tag": "input", "attrs": { "id": "emp" } }
            ] }
        ] }
    ]));

    let hints = collect_hints(&doc, by_id(&doc, "emp"));
    assert!(hints.contains(&"Employer name".to_string()));
}

#[test]
fn field_group_that_is_the_parent_is_not_counted_twice() {
    let doc = page(json!([
        { "tag": "div", "attrs": { "class": "input-group" }, "children": [
            { "tag": "span", "attrs": { "class": "label" }, "children": ["Suburb"] },
            { "tag": "input", "attrs": { "id": "sub" } }
        ] }
    ]));

    let hints = collect_hints(&doc, by_id(&doc, "sub"));
    assert_eq!(hints, vec!["sub"], "group == parent, and the span is not a <label>");
}

// =========================================================================
// Malformed lookups
// =========================================================================

#[test]
fn malformed_id_skips_only_the_label_lookup() {
    let doc = page(json!([
        { "tag": "label", "attrs": { "for": "bad id" }, "children": ["Email Address"] },
        { "tag": "label", "children": [
            "Given name",
            { "tag": "input", "attrs": { "id": "bad id" } }
        ] }
    ]));
    let el = doc
        .elements()
        .find(|e| doc.tag(*e) == Some("input"))
        .unwrap();

    let hints = collect_hints(&doc, el);
    assert!(!hints.contains(&"Email Address".to_string()), "label[for] lookup skipped");
    assert!(hints.contains(&"bad id".to_string()), "attributes still collected");
    assert!(hints.contains(&"Given name".to_string()), "later sources still collected");
}
