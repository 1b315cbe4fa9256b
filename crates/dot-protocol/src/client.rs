use serde::{Deserialize, Serialize};

/// A client of the agency. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    /// Stable short code (e.g., "SKY"). Job numbers are prefixed with it.
    pub code: String,
    /// Display name (e.g., "Sky").
    pub name: String,
}

impl Client {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
