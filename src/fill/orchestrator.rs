use crate::dom::dom_model::{Document, NodeId};
use crate::dom::writer::{NativeWriter, PlatformAccessor, ValueAccessor};
use crate::fill::report::{FillReport, SkipReason, SkipRecord, WriteRecord, page_fingerprint};
use crate::fill::site::detect_site_for_url;
use crate::matching::matcher::{hint_text, match_field};
use crate::resolve::option::{radio_matches, resolve_option};
use crate::resolve::profile::Profile;
use crate::resolve::value::{dob_to_iso, resolve_value};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FillTraceEvent;

/// How a fillable element takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    Select,
    Radio,
    Date,
}

/// Classify an element as a fillable control, or `None` for anything the
/// engine never writes (buttons, hidden inputs, checkboxes, file pickers, ...).
pub fn control_kind(doc: &Document, el: NodeId) -> Option<ControlKind> {
    let element = doc.element(el)?;

    match element.tag.as_str() {
        "select" => Some(ControlKind::Select),
        "textarea" => Some(ControlKind::TextArea),
        "input" => match element.input_type()?.as_str() {
            "hidden" | "submit" | "button" | "reset" | "image" | "checkbox" | "file" => None,
            "radio" => Some(ControlKind::Radio),
            "date" => Some(ControlKind::Date),
            _ => Some(ControlKind::Text),
        },
        _ => None,
    }
}

/// Fillable elements in document order. Elements that are not laid out are
/// dropped, except radios, which are often visually replaced by styled siblings.
pub fn fillable_elements(doc: &Document) -> Vec<(NodeId, ControlKind)> {
    doc.elements()
        .filter_map(|el| control_kind(doc, el).map(|kind| (el, kind)))
        .filter(|(el, kind)| *kind == ControlKind::Radio || doc.is_laid_out(*el))
        .collect()
}

/// One fill pass with the platform writer and no trace.
pub fn fill_page(doc: &mut Document, profile: &Profile) -> FillReport {
    fill_page_with(
        doc,
        profile,
        &NativeWriter::<PlatformAccessor>::platform(),
        &TraceLogger::disabled(),
    )
}

/// One fill pass over `doc`.
///
/// Every failure is local to its element; the pass always visits every
/// fillable element and reports the distinct field keys it wrote.
pub fn fill_page_with<A: ValueAccessor>(
    doc: &mut Document,
    profile: &Profile,
    writer: &NativeWriter<A>,
    tracer: &TraceLogger,
) -> FillReport {
    let elements = fillable_elements(doc);
    let hints: Vec<String> = elements.iter().map(|(el, _)| hint_text(doc, *el)).collect();

    let mut report = FillReport {
        url: doc.url.clone(),
        site: doc
            .url
            .as_deref()
            .and_then(detect_site_for_url)
            .map(|s| s.to_string()),
        fingerprint: page_fingerprint(&hints),
        ..Default::default()
    };

    for ((el, kind), hint) in elements.into_iter().zip(hints.iter()) {
        let element_name = doc.describe(el);
        let event = FillTraceEvent::now(&report.fingerprint, &element_name, hint);

        let Some(matched) = match_field(doc, el) else {
            tracer.log(&event.skipped(&SkipReason::NoMatch));
            report.record_skip(SkipRecord {
                element: element_name,
                node: el,
                field_key: None,
                reason: SkipReason::NoMatch,
            });
            continue;
        };
        let event = event.with_match(&matched);
        let key = matched.field_key;

        let outcome = fill_element(doc, writer, el, kind, key, profile);

        match outcome {
            Ok(value) => {
                tracer.log(&event.filled(&value));
                report.record_write(WriteRecord {
                    field_key: key.to_string(),
                    element: element_name,
                    node: el,
                    value,
                });
            }
            Err(reason) => {
                tracer.log(&event.skipped(&reason));
                report.record_skip(SkipRecord {
                    element: element_name,
                    node: el,
                    field_key: Some(key.to_string()),
                    reason,
                });
            }
        }
    }

    report
}

/// Resolve and write one matched element. Returns the value written.
fn fill_element<A: ValueAccessor>(
    doc: &mut Document,
    writer: &NativeWriter<A>,
    el: NodeId,
    kind: ControlKind,
    key: &str,
    profile: &Profile,
) -> Result<String, SkipReason> {
    let value = resolve_value(key, profile);
    if value.is_empty() {
        return Err(SkipReason::EmptyValue);
    }

    let write_failed = |e: crate::dom::dom_model::DomError| SkipReason::WriteFailed(e.to_string());

    match kind {
        ControlKind::Radio => {
            let label = doc
                .parent_element(el)
                .map(|p| doc.text_content(p))
                .unwrap_or_default();
            let radio_value = doc.attr(el, "value").unwrap_or("on").to_string();

            if !radio_matches(key, &value, &label, &radio_value) {
                return Err(SkipReason::RadioMismatch);
            }
            writer.check(doc, el).map_err(write_failed)?;
            Ok(radio_value)
        }
        ControlKind::Select => {
            let options = doc.select_options(el);
            let chosen =
                resolve_option(&options, key, &value).ok_or(SkipReason::UnresolvableOption)?;
            writer.write_value(doc, el, &chosen).map_err(write_failed)?;
            Ok(chosen)
        }
        ControlKind::Date if key == "dob" => {
            let iso = dob_to_iso(&value).ok_or(SkipReason::MalformedDate)?;
            writer.write_value(doc, el, &iso).map_err(write_failed)?;
            Ok(iso)
        }
        ControlKind::Date | ControlKind::Text | ControlKind::TextArea => {
            writer.write_value(doc, el, &value).map_err(write_failed)?;
            Ok(value)
        }
    }
}
