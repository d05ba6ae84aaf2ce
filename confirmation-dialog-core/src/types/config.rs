//! Dialog configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Built-in dialog layout, used when no layout file is configured
pub const DEFAULT_LAYOUT_FILE: &str = "template/layout.html";

/// Built-in confirmer template, used when no template file is configured
pub const DEFAULT_TEMPLATE_FILE: &str = "template/default.html";

/// How long a session-persisted confirmation stays resumable (30 minutes)
pub const DEFAULT_PENDING_TTL_SECS: u64 = 1800;

fn default_pending_ttl_secs() -> u64 {
    DEFAULT_PENDING_TTL_SECS
}

/// Dialog configuration surface (`{ layoutFile, templateFile }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogConfig {
    /// Overrides the dialog layout template
    #[serde(default)]
    pub layout_file: Option<PathBuf>,

    /// Overrides the confirmer template
    #[serde(default)]
    pub template_file: Option<PathBuf>,

    #[serde(default = "default_pending_ttl_secs")]
    pub pending_ttl_secs: u64,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            layout_file: None,
            template_file: None,
            pending_ttl_secs: DEFAULT_PENDING_TTL_SECS,
        }
    }
}
