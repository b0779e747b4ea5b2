//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How replay reports are printed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One human-readable line per frame
    #[default]
    Text,
    /// A JSON array of frame reports
    Json,
}
