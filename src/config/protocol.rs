use std::fmt;

use serde::{Deserialize, Serialize};

/// Routing protocol label attached to a result table.
///
/// Only selects legend text and series style; it never changes how numbers are computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(pub String);

impl Protocol {
    pub fn new(label: impl Into<String>) -> Self {
        Protocol(label.into())
    }

    /// `aodv.csv` -> `aodv`. Falls back to the whole file name.
    pub fn from_path(path: &std::path::Path) -> Self {
        let stem = path
            .file_stem()
            .or_else(|| path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Protocol(stem)
    }

    /// Lower-case form used in output file names.
    pub fn file_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Upper-case form used in titles and legends.
    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
