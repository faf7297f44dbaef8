use crate::dom::dom_model::SelectOption;
use crate::resolve::aliases::alias_table_for;
use crate::text::normalize::{fold, normalize};

/// Pick the option of a constrained control that best represents `raw_value`.
///
/// Alias candidates are tried first (for fields that have an alias table),
/// then exact value, exact text and text-contains fallbacks. Options with an
/// empty value are placeholders and never chosen. Returns the option's value.
pub fn resolve_option(
    options: &[SelectOption],
    field_key: &str,
    raw_value: &str,
) -> Option<String> {
    let options: Vec<&SelectOption> = options.iter().filter(|o| !o.value.is_empty()).collect();
    if options.is_empty() {
        return None;
    }

    let lower = fold(raw_value);

    if let Some(candidates) = alias_table_for(field_key).and_then(|t| t.candidates(&lower)) {
        let hit = options.iter().find(|opt| {
            let ov = fold(&opt.value);
            let ot = fold(&opt.text);
            candidates.iter().any(|a| {
                ov == *a || ot == *a || ot.starts_with(&format!("{} ", a)) || ov.starts_with(*a)
            })
        });
        if let Some(opt) = hit {
            return Some(opt.value.clone());
        }
    }

    // Fallback: exact value -> exact text -> text contains
    options
        .iter()
        .find(|o| fold(&o.value) == lower)
        .or_else(|| options.iter().find(|o| fold(&o.text) == lower))
        .or_else(|| options.iter().find(|o| o.text.to_lowercase().contains(&lower)))
        .map(|o| o.value.clone())
}

/// Whether a radio with the given surrounding label text and value attribute
/// represents `raw_value` for `field_key`.
///
/// Only fields with an alias table can drive radios. A radio matches when any
/// normalized candidate occurs anywhere in the normalized label and value, so
/// "own" matches "Homeowner".
pub fn radio_matches(
    field_key: &str,
    raw_value: &str,
    label_text: &str,
    radio_value: &str,
) -> bool {
    let Some(table) = alias_table_for(field_key) else {
        return false;
    };
    let Some(candidates) = table.candidates(&fold(raw_value)) else {
        return false;
    };

    let haystack = normalize(&format!("{} {}", label_text, radio_value));
    candidates
        .iter()
        .map(|a| normalize(a))
        .any(|a| !a.is_empty() && haystack.contains(a.as_str()))
}
