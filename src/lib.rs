use crate::{dom::dom_model::Document, fill::error::FillError};

pub mod cli;
pub mod dom;
pub mod fill;
pub mod matching;
pub mod resolve;
pub mod text;
pub mod trace;

pub use crate::fill::orchestrator::{fill_page, fill_page_with};
pub use crate::fill::report::FillReport;
pub use crate::resolve::profile::Profile;

/// Read and parse a page snapshot file.
pub fn load_page(path: &str) -> Result<Document, FillError> {
    let content = std::fs::read_to_string(path).map_err(|source| FillError::Io {
        path: path.to_string(),
        source,
    })?;

    Document::from_json(&content).map_err(|source| FillError::SnapshotParse {
        context: path.to_string(),
        source,
    })
}
