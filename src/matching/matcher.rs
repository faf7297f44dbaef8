use serde::Serialize;

use crate::dom::dom_model::{Document, NodeId};
use crate::matching::catalog::COMPILED_KEYWORDS;
use crate::matching::hints::collect_hints;
use crate::text::normalize::normalize;

/// Shortest keyword accepted as a match.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Below this score the split date-of-birth check runs.
pub const DOB_FALLBACK_BELOW: usize = 4;

const BIRTH_CONTEXT: [&str; 3] = ["birth", "dob", "age"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchSource {
    /// Longest catalog keyword found in the hint text.
    Keyword,
    /// Bare DD / MM / YYYY control inside a date-of-birth context.
    DobPart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub field_key: &'static str,
    pub keyword: String,
    pub score: usize,
    pub source: MatchSource,
}

/// Classify a control into a profile field key from its hints.
pub fn match_field(doc: &Document, el: NodeId) -> Option<MatchResult> {
    let hint_text = hint_text(doc, el);
    if hint_text.is_empty() {
        return None;
    }

    let best = best_keyword(&hint_text);
    let score = best.map(|(_, kw)| kw.len()).unwrap_or(0);
    let whole_date = best.is_some_and(|(key, _)| key == "dob");

    // A bare DD / MM / YYYY box under a "Date of Birth" legend is one part of
    // the date, not the whole of it.
    if score < DOB_FALLBACK_BELOW || whole_date {
        if let Some(result) = match_dob_part(doc, el, &hint_text) {
            return Some(result);
        }
    }

    let (key, keyword) = best?;
    if score < MIN_KEYWORD_LEN {
        return None;
    }

    Some(MatchResult {
        field_key: key,
        keyword: keyword.to_string(),
        score,
        source: MatchSource::Keyword,
    })
}

/// All hints for `el`, joined and normalized.
pub fn hint_text(doc: &Document, el: NodeId) -> String {
    normalize(&collect_hints(doc, el).join(" "))
}

/// Longest catalog keyword contained in `hint_text`; the first one wins ties.
pub fn best_keyword(hint_text: &str) -> Option<(&'static str, &'static str)> {
    let mut best: Option<(&'static str, &'static str)> = None;

    for kw in COMPILED_KEYWORDS.iter() {
        let longer = best.is_none_or(|(_, b)| kw.normalized.len() > b.len());
        if longer && !kw.normalized.is_empty() && hint_text.contains(kw.normalized.as_str()) {
            best = Some((kw.key, kw.normalized.as_str()));
        }
    }

    best
}

fn match_dob_part(doc: &Document, el: NodeId, hint_text: &str) -> Option<MatchResult> {
    if !BIRTH_CONTEXT.iter().any(|ctx| hint_text.contains(ctx)) {
        return None;
    }

    let element = doc.element(el)?;
    let own = ["placeholder", "name", "aria-label"]
        .iter()
        .find_map(|attr| element.attr(attr).filter(|v| !v.is_empty()))
        .unwrap_or("");
    let bare = normalize(own);

    let key = match bare.as_str() {
        "dd" | "day" => "dobDay",
        "mm" | "month" => "dobMonth",
        "yy" | "yyyy" | "year" => "dobYear",
        _ => return None,
    };

    Some(MatchResult {
        field_key: key,
        score: bare.len(),
        keyword: bare,
        source: MatchSource::DobPart,
    })
}
