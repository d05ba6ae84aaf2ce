//! Configuration loading
//!
//! The dialog reads its options from a `[confirmationDialog]` table:
//!
//! ```toml
//! [confirmationDialog]
//! layoutFile = "templates/dialog/layout.html"
//! templateFile = "templates/dialog/confirm.html"
//! pendingTtlSecs = 900
//! ```

use std::path::Path;

use confirmation_dialog_core::error::{DialogError, DialogResult};
use confirmation_dialog_core::types::DialogConfig;
use serde::Deserialize;

/// Name of the configuration table
pub const EXTENSION_NAME: &str = "confirmationDialog";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "confirmationDialog", default)]
    dialog: DialogConfig,
}

/// Parse dialog configuration from TOML text. A missing table yields defaults.
pub fn parse_config(contents: &str) -> DialogResult<DialogConfig> {
    let file: ConfigFile =
        toml::from_str(contents).map_err(|e| DialogError::ConfigError(e.to_string()))?;
    Ok(file.dialog)
}

/// Load dialog configuration from a TOML file.
///
/// Relative template paths are resolved against the file's directory.
pub fn load_config(path: &Path) -> DialogResult<DialogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DialogError::ConfigError(format!("{}: {e}", path.display())))?;
    let mut config = parse_config(&contents)?;

    if let Some(base) = path.parent() {
        for file in [&mut config.layout_file, &mut config.template_file] {
            if let Some(p) = file.as_mut().filter(|p| p.is_relative()) {
                *p = base.join(&*p);
            }
        }
    }

    log::debug!("Loaded dialog configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_table_gives_defaults() {
        let config = parse_config("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, DialogConfig::default());
    }

    #[test]
    fn reads_template_paths() {
        let config = parse_config(
            r#"
            [confirmationDialog]
            layoutFile = "dialog/layout.html"
            templateFile = "dialog/confirm.html"
            pendingTtlSecs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.layout_file, Some(PathBuf::from("dialog/layout.html")));
        assert_eq!(config.template_file, Some(PathBuf::from("dialog/confirm.html")));
        assert_eq!(config.pending_ttl_secs, 60);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = parse_config("[confirmationDialog\n").unwrap_err();
        assert!(matches!(err, DialogError::ConfigError(_)));
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = parse_config("[confirmationDialog]\npendingTtlSecs = \"soon\"\n").unwrap_err();
        assert!(matches!(err, DialogError::ConfigError(_)));
    }
}
