//! Configuration and wiring for the confirmation dialog control.
//!
//! Provides `DialogFactory` (creates one `ConfirmationDialog` per request with the
//! configured templates and shared collaborators), `DialogFactoryBuilder`
//! (collaborator injection) and configuration/logging helpers.

pub mod config;
pub mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use confirmation_dialog_core::error::{DialogError, DialogResult};
use confirmation_dialog_core::services::ConfirmationDialog;
use confirmation_dialog_core::traits::{
    ConfirmerFactory, DefaultConfirmerFactory, InMemorySessionStore, SessionStore,
};
use confirmation_dialog_core::types::DialogConfig;

pub use config::{load_config, parse_config, EXTENSION_NAME};
pub use logging::init_logging;

/// Translation directory name, relative to the deployed resource base.
pub const TRANSLATIONS_DIR: &str = "translations";

/// Directories holding the dialog's translation files, for the host translator.
///
/// Points into this crate's source tree, so it only resolves where the crate was
/// built. Deployed hosts ship the `translations/` directory and call
/// [`translation_resources_in`] with its parent.
pub fn translation_resources() -> Vec<PathBuf> {
    translation_resources_in(Path::new(env!("CARGO_MANIFEST_DIR")))
}

/// Translation directories below a host-chosen resource base
pub fn translation_resources_in(base: &Path) -> Vec<PathBuf> {
    vec![base.join(TRANSLATIONS_DIR)]
}

/// Creates confirmation dialogs with shared collaborators.
///
/// Built once at startup via `DialogFactoryBuilder`; `create` is called once per request.
pub struct DialogFactory {
    config: DialogConfig,
    confirmer_factory: Arc<dyn ConfirmerFactory>,
    session_store: Arc<dyn SessionStore>,
}

impl DialogFactory {
    /// Create a dialog for the component at `component_path`
    pub fn create(&self, component_path: &str) -> ConfirmationDialog {
        log::debug!("Creating confirmation dialog for {component_path}");
        ConfirmationDialog::with_config(
            component_path,
            Arc::clone(&self.confirmer_factory),
            &self.config,
        )
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session_store
    }

    /// Resume a confirmation left pending by a previous full-page request.
    ///
    /// Call after all confirmers are registered.
    pub async fn resume(&self, dialog: &mut ConfirmationDialog) -> DialogResult<bool> {
        let restored = dialog
            .restore_from_session(self.session_store.as_ref())
            .await?;
        if restored {
            log::info!("Resumed pending confirmation for {}", dialog.component_path());
        }
        Ok(restored)
    }

    /// Store the dialog's active confirmation for the next full-page request
    pub async fn persist(&self, dialog: &ConfirmationDialog) -> DialogResult<()> {
        dialog.save_to_session(self.session_store.as_ref()).await
    }
}

/// Builder for constructing `DialogFactory` with host-specific collaborators.
///
/// # Optional
/// - `config`: defaults to `DialogConfig::default()`
/// - `confirmer_factory`: defaults to `DefaultConfirmerFactory`
/// - `session_store`: defaults to `InMemorySessionStore`
pub struct DialogFactoryBuilder {
    config: Option<DialogConfig>,
    confirmer_factory: Option<Arc<dyn ConfirmerFactory>>,
    session_store: Option<Arc<dyn SessionStore>>,
}

impl DialogFactoryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            confirmer_factory: None,
            session_store: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: DialogConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn confirmer_factory(mut self, factory: Arc<dyn ConfirmerFactory>) -> Self {
        self.confirmer_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the `DialogFactory`.
    ///
    /// # Errors
    /// Returns `DialogError::ValidationError` if the configuration is unusable.
    pub fn build(self) -> DialogResult<DialogFactory> {
        let config = self.config.unwrap_or_default();
        if config.pending_ttl_secs == 0 {
            return Err(DialogError::ValidationError(
                "pendingTtlSecs must be greater than zero".to_string(),
            ));
        }
        for (key, path) in [
            ("layoutFile", &config.layout_file),
            ("templateFile", &config.template_file),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(DialogError::ValidationError(format!(
                    "{key} must not be empty"
                )));
            }
        }

        let confirmer_factory = self
            .confirmer_factory
            .unwrap_or_else(|| Arc::new(DefaultConfirmerFactory));
        let session_store = self
            .session_store
            .unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));

        Ok(DialogFactory {
            config,
            confirmer_factory,
            session_store,
        })
    }
}

impl Default for DialogFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
