use std::fmt;

use crate::dom::dom_model::DomError;

#[derive(Debug)]
pub enum FillError {
    /// Reading an input file failed
    Io { path: String, source: std::io::Error },

    /// Page snapshot JSON did not parse
    SnapshotParse { context: String, source: serde_json::Error },

    /// Profile (JSON or YAML) did not parse
    ProfileParse { context: String, source: serde_yaml::Error },

    /// Report serialization failed
    JsonSerialize { context: String, source: serde_json::Error },

    /// Profile has neither a first nor a last name
    ProfileMissingName,

    /// Document lookup or write failed
    Dom(DomError),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            FillError::SnapshotParse { context, source } => {
                write!(f, "Page snapshot parse error ({}): {}", context, source)
            }
            FillError::ProfileParse { context, source } => {
                write!(f, "Profile parse error ({}): {}", context, source)
            }
            FillError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            FillError::ProfileMissingName => {
                write!(f, "Profile needs at least a first or last name before filling")
            }
            FillError::Dom(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FillError::Io { source, .. } => Some(source),
            FillError::SnapshotParse { source, .. } => Some(source),
            FillError::ProfileParse { source, .. } => Some(source),
            FillError::JsonSerialize { source, .. } => Some(source),
            FillError::Dom(e) => Some(e),
            FillError::ProfileMissingName => None,
        }
    }
}

impl From<DomError> for FillError {
    fn from(e: DomError) -> Self {
        FillError::Dom(e)
    }
}
