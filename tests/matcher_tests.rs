use std::collections::HashSet;

use form_autofill::matching::catalog::{COMPILED_KEYWORDS, FIELD_DEFINITIONS, definition};
use form_autofill::matching::matcher::{MatchSource, best_keyword, match_field};
use form_autofill::text::normalize::normalize;
use serde_json::json;

use crate::common::{by_id, labeled_input, page};

mod common;

// =========================================================================
// Catalog
// =========================================================================

#[test]
fn catalog_keys_are_unique() {
    let mut seen = HashSet::new();
    for def in FIELD_DEFINITIONS {
        assert!(seen.insert(def.key), "duplicate field key {}", def.key);
    }
}

#[test]
fn compiled_keywords_are_normalized_in_catalog_order() {
    let total: usize = FIELD_DEFINITIONS.iter().map(|d| d.keywords.len()).sum();
    assert_eq!(COMPILED_KEYWORDS.len(), total);
    assert_eq!(COMPILED_KEYWORDS[0].key, "annualIncome");
    assert_eq!(COMPILED_KEYWORDS[0].normalized, "gross annual income");

    let dob_day = definition("dobDay").unwrap();
    assert!(dob_day.keywords.contains(&"day (dd)"));
    assert!(COMPILED_KEYWORDS.iter().any(|k| k.key == "dobDay" && k.normalized == "day dd"));
}

/// Every keyword, used as the whole hint, is matched to its own field unless
/// an earlier definition carries the same phrase.
#[test]
fn every_keyword_matches_its_own_field_or_an_earlier_duplicate() {
    let position = |key: &str| FIELD_DEFINITIONS.iter().position(|d| d.key == key);

    for def in FIELD_DEFINITIONS {
        for kw in def.keywords {
            let hint = normalize(kw);
            if hint.len() < 3 {
                continue;
            }

            let (key, winner) = best_keyword(&hint).expect("keyword must match itself");
            assert_eq!(winner, hint, "{:?} lost to {:?}", kw, winner);
            if key != def.key {
                assert!(
                    position(key) < position(def.key),
                    "{:?} ({}) taken by later field {}",
                    kw,
                    def.key,
                    key
                );
            }
        }
    }
}

// =========================================================================
// Scoring
// =========================================================================

#[test]
fn longest_keyword_wins() {
    let (key, kw) = best_keyword("please enter your gross annual income before tax").unwrap();
    assert_eq!(key, "annualIncome");
    assert_eq!(kw, "gross annual income");

    let (key, kw) = best_keyword("residential address").unwrap();
    assert_eq!(key, "address1");
    assert_eq!(kw, "residential address");
}

#[test]
fn equal_length_tie_goes_to_earlier_definition() {
    // "total monthly expenses" is a keyword of both monthlyExpenses and
    // totalMonthlyExpenses; monthlyExpenses comes first in the catalog.
    let pos_other = FIELD_DEFINITIONS.iter().position(|d| d.key == "monthlyExpenses").unwrap();
    let pos_total = FIELD_DEFINITIONS.iter().position(|d| d.key == "totalMonthlyExpenses").unwrap();
    assert!(pos_other < pos_total);

    let (key, _) = best_keyword("total monthly expenses").unwrap();
    assert_eq!(key, "monthlyExpenses");
}

#[test]
fn element_with_income_and_gross_annual_income_matches_annual_income() {
    let doc = page(json!([labeled_input("inc", "Gross Annual Income", "text")]));

    let m = match_field(&doc, by_id(&doc, "inc")).unwrap();
    assert_eq!(m.field_key, "annualIncome");
    assert_eq!(m.keyword, "gross annual income");
    assert_eq!(m.source, MatchSource::Keyword);
}

#[test]
fn common_labels_resolve() {
    let cases = [
        ("First Name", "firstName"),
        ("Surname", "lastName"),
        ("Email Address", "email"),
        ("Mobile phone number", "phone"),
        ("Postcode", "postcode"),
        ("State/Territory", "state"),
        ("Employment Status", "employmentStatus"),
        ("Residential Status", "residentialStatus"),
        ("Driver Licence Number", "licenceNumber"),
        ("Medicare card number", "medicareNumber"),
    ];

    for (label, expected) in cases {
        let doc = page(json!([labeled_input("f", label, "text")]));
        let m = match_field(&doc, by_id(&doc, "f"));
        assert_eq!(m.map(|m| m.field_key), Some(expected), "label {:?}", label);
    }
}

#[test]
fn no_hints_or_short_hits_do_not_match() {
    let doc = page(json!([
        { "tag": "input", "attrs": { "type": "text" } },
        { "tag": "input", "attrs": { "id": "q", "placeholder": "Search" } }
    ]));

    let bare = doc.elements().next().unwrap();
    assert_eq!(match_field(&doc, bare), None, "no hints at all");
    assert_eq!(match_field(&doc, by_id(&doc, "q")), None, "no keyword in hints");
}

// =========================================================================
// Split date of birth
// =========================================================================

fn dob_fieldset() -> serde_json::Value {
    json!([
        { "tag": "fieldset", "children": [
            { "tag": "legend", "children": ["Date of Birth"] },
            { "tag": "input", "attrs": { "id": "p1", "placeholder": "DD" } },
            { "tag": "input", "attrs": { "id": "p2", "placeholder": "MM" } },
            { "tag": "input", "attrs": { "id": "p3", "placeholder": "YYYY" } }
        ] }
    ])
}

#[test]
fn dob_parts_inside_date_of_birth_fieldset() {
    let doc = page(dob_fieldset());

    let day = match_field(&doc, by_id(&doc, "p1")).unwrap();
    assert_eq!(day.field_key, "dobDay");
    assert_eq!(day.source, MatchSource::DobPart);

    assert_eq!(match_field(&doc, by_id(&doc, "p2")).unwrap().field_key, "dobMonth");
    assert_eq!(match_field(&doc, by_id(&doc, "p3")).unwrap().field_key, "dobYear");
}

#[test]
fn dob_parts_with_short_context_token() {
    // Only "dob" from a sibling label gives the birth context
    let doc = page(json!([
        { "tag": "div", "children": [
            { "tag": "label", "children": ["DOB"] },
            { "tag": "input", "attrs": { "id": "x", "name": "day" } }
        ] }
    ]));

    assert_eq!(match_field(&doc, by_id(&doc, "x")).unwrap().field_key, "dobDay");
}

#[test]
fn whole_date_input_stays_dob() {
    let doc = page(json!([
        { "tag": "fieldset", "children": [
            { "tag": "legend", "children": ["Date of Birth"] },
            { "tag": "input", "attrs": { "id": "d", "placeholder": "DD/MM/YYYY" } }
        ] }
    ]));

    assert_eq!(match_field(&doc, by_id(&doc, "d")).unwrap().field_key, "dob");
}

#[test]
fn bare_day_token_without_birth_context_is_ignored() {
    let doc = page(json!([
        { "tag": "input", "attrs": { "id": "x", "placeholder": "DD" } }
    ]));

    assert_eq!(match_field(&doc, by_id(&doc, "x")), None);
}
