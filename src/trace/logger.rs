use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::trace::trace::FillTraceEvent;

/// JSONL sink for per-element fill decisions.
///
/// Opening or writing the file never fails a fill: problems are reported on
/// stderr and the logger carries on, or stays disabled.
pub struct TraceLogger {
    target: Option<TraceTarget>,
}

struct TraceTarget {
    path: PathBuf,
    file: Mutex<File>,
}

impl TraceLogger {
    /// Append to `path`, creating it if needed.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                target: Some(TraceTarget {
                    path: path.to_path_buf(),
                    file: Mutex::new(file),
                }),
            },
            Err(e) => {
                eprintln!("Warning: trace disabled, cannot open '{}': {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { target: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.target.as_ref().map(|t| t.path.as_path())
    }

    pub fn log(&self, event: &FillTraceEvent) {
        let Some(target) = &self.target else {
            return;
        };

        if let Err(e) = target.append(event) {
            eprintln!(
                "Warning: failed to write trace event to '{}': {}",
                target.path.display(),
                e
            );
        }
    }
}

impl TraceTarget {
    fn append(&self, event: &FillTraceEvent) -> io::Result<()> {
        let line = serde_json::to_string(event)?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("trace file lock poisoned"))?;
        writeln!(file, "{}", line)
    }
}
