use serde::Serialize;

use crate::dom::dom_model::{Document, NodeId};

/// Why an element was left alone. None of these abort a fill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Hints did not clear the keyword-length floor
    NoMatch,
    /// Matched, but the profile has nothing for this field
    EmptyValue,
    /// No select option fits the value under any alias or fallback rule
    UnresolvableOption,
    /// Radio whose label does not represent the value
    RadioMismatch,
    /// Date input but the stored date is not day/month/year
    MalformedDate,
    /// The write itself was rejected by the document
    WriteFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteRecord {
    pub field_key: String,
    pub element: String,
    pub node: NodeId,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipRecord {
    pub element: String,
    pub node: NodeId,
    pub field_key: Option<String>,
    pub reason: SkipReason,
}

/// Outcome of one fill pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FillReport {
    pub url: Option<String>,
    pub site: Option<String>,
    pub fingerprint: String,

    /// Distinct field keys written, in first-write order.
    pub filled: Vec<String>,
    pub writes: Vec<WriteRecord>,
    pub skipped: Vec<SkipRecord>,
}

impl FillReport {
    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    pub fn record_write(&mut self, record: WriteRecord) {
        if !self.filled.contains(&record.field_key) {
            self.filled.push(record.field_key.clone());
        }
        self.writes.push(record);
    }

    pub fn record_skip(&mut self, record: SkipRecord) {
        self.skipped.push(record);
    }

    /// One-line outcome, e.g. `Filled 3 fields on ANZ`.
    pub fn summary(&self) -> String {
        let n = self.filled_count();
        if n == 0 {
            return "No matching form fields found on this page".to_string();
        }

        let plural = if n == 1 { "" } else { "s" };
        let place = self.site.as_deref().unwrap_or("this page");
        format!("Filled {} field{} on {}", n, plural, place)
    }
}

/// Stable digest of a page's form layout: the hint text of every fillable
/// element, in document order.
pub fn page_fingerprint(hint_texts: &[String]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    for text in hint_texts {
        hasher.update(text.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

/// Format a fill report for terminal output.
///
/// Produces output like:
/// ```text
/// === Fill: https://www.anz.com.au/apply ===
///
/// ✓ firstName      input#first_name = "Jane"
/// · skipped        input#promo (NoMatch)
///
/// === Filled 1 field on ANZ ===
/// ```
pub fn format_console_report(report: &FillReport, doc: &Document, verbose: u8) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Fill: {} ===\n\n",
        report.url.as_deref().unwrap_or(doc.title.as_str())
    ));

    for write in &report.writes {
        out.push_str(&format!(
            "\u{2713} {:<20} {} = {:?}\n",
            write.field_key, write.element, write.value
        ));
    }

    // Skips are noise unless asked for
    if verbose > 0 {
        for skip in &report.skipped {
            let key = skip.field_key.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "\u{00b7} {:<20} {} ({:?})\n",
                key, skip.element, skip.reason
            ));
        }
    }

    out.push_str(&format!("\n=== {} ===\n", report.summary()));
    out
}
