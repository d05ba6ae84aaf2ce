//! Confirmation dialog control
//!
//! Owns the named confirmers of one page component for the duration of a request
//! and tracks which of them, if any, is currently displayed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::signal_router::{SignalDispatch, SignalRouter};
use crate::error::{DialogError, DialogResult};
use crate::traits::{ConfirmerFactory, RenderAdapter, RenderContext, SessionStore};
use crate::types::{
    confirm_handler, ActiveConfirmation, ActiveConfirmer, Confirmer, DialogConfig, DialogText,
    HandlerError, Params, DEFAULT_LAYOUT_FILE, DEFAULT_PENDING_TTL_SECS, DEFAULT_TEMPLATE_FILE,
};
use crate::utils::naming;

/// Prefix of the session key holding a pending confirmation
pub const SESSION_NAMESPACE: &str = "confirmation-dialog";

/// Confirmation dialog control (the confirmer registry)
pub struct ConfirmationDialog {
    component_path: String,
    factory: Arc<dyn ConfirmerFactory>,
    confirmers: HashMap<String, Confirmer>,
    active: Option<ActiveConfirmation>,
    use_ajax: bool,
    layout_file: Option<PathBuf>,
    template_file: Option<PathBuf>,
    pending_ttl_secs: u64,
    redraw_requested: bool,
}

impl ConfirmationDialog {
    /// Create a dialog with default templates and AJAX enabled
    ///
    /// # Arguments
    /// * `component_path` - Path of the owning component, used to derive the session key
    /// * `factory` - Shared confirmer factory
    #[must_use]
    pub fn new(component_path: impl Into<String>, factory: Arc<dyn ConfirmerFactory>) -> Self {
        Self {
            component_path: component_path.into(),
            factory,
            confirmers: HashMap::new(),
            active: None,
            use_ajax: true,
            layout_file: None,
            template_file: None,
            pending_ttl_secs: DEFAULT_PENDING_TTL_SECS,
            redraw_requested: false,
        }
    }

    /// Create a dialog and apply the configured template overrides
    #[must_use]
    pub fn with_config(
        component_path: impl Into<String>,
        factory: Arc<dyn ConfirmerFactory>,
        config: &DialogConfig,
    ) -> Self {
        let mut dialog = Self::new(component_path, factory);
        dialog.layout_file.clone_from(&config.layout_file);
        dialog.template_file.clone_from(&config.template_file);
        dialog.pending_ttl_secs = config.pending_ttl_secs;
        dialog
    }

    pub fn component_path(&self) -> &str {
        &self.component_path
    }

    /// Change the dialog layout path
    pub fn set_layout_file(&mut self, layout_file: impl Into<PathBuf>) {
        self.layout_file = Some(layout_file.into());
    }

    /// Change the confirmer template path.
    ///
    /// Only confirmers created after this call pick up the new path.
    pub fn set_template_file(&mut self, template_file: impl Into<PathBuf>) {
        self.template_file = Some(template_file.into());
    }

    /// Layout path, falling back to the built-in layout
    pub fn layout_file(&self) -> &Path {
        self.layout_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LAYOUT_FILE))
    }

    /// Confirmer template path, falling back to the built-in template
    pub fn template_file(&self) -> &Path {
        self.template_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_TEMPLATE_FILE))
    }

    /// Applies to confirmers created after this call only.
    pub fn enable_ajax(&mut self) {
        self.use_ajax = true;
    }

    /// Applies to confirmers created after this call only.
    pub fn disable_ajax(&mut self) {
        self.use_ajax = false;
    }

    pub fn is_ajax(&self) -> bool {
        self.use_ajax
    }

    /// Get the confirmer for `name`, creating it through the factory on first access.
    ///
    /// The created confirmer inherits the AJAX mode in effect at this moment.
    pub fn lookup(&mut self, name: &str) -> DialogResult<&mut Confirmer> {
        if !naming::is_valid_name(name) {
            return Err(DialogError::InvalidName(name.to_string()));
        }

        let factory = &self.factory;
        let template_file = self.template_file.as_deref();
        let use_ajax = self.use_ajax;

        Ok(self
            .confirmers
            .entry(name.to_string())
            .or_insert_with(|| {
                log::debug!("Creating confirmer \"{name}\" (ajax: {use_ajax})");
                let mut confirmer = factory.create(name, template_file);
                if use_ajax {
                    confirmer.enable_ajax();
                } else {
                    confirmer.disable_ajax();
                }
                confirmer
            }))
    }

    /// Register a named confirmation
    ///
    /// # Arguments
    /// * `name` - Confirmer/signal name, letters and underscores only
    /// * `handler` - Called with the invocation params once the user confirms
    /// * `question` - Question text or callback `(confirmer, params)`
    /// * `heading` - Heading text or callback `(confirmer, params)`
    pub fn add_confirmer<H>(
        &mut self,
        name: &str,
        handler: H,
        question: impl Into<DialogText>,
        heading: impl Into<DialogText>,
    ) -> DialogResult<()>
    where
        H: Fn(&Params) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.lookup(name)?.configure(confirm_handler(handler), question.into(), heading.into())
    }

    /// Get a configured confirmer. Never creates entries.
    pub fn confirmer(&self, name: &str) -> DialogResult<&Confirmer> {
        self.confirmers
            .get(name)
            .filter(|c| c.is_configured())
            .ok_or_else(|| DialogError::NotConfigured(name.to_string()))
    }

    /// Names of all created confirmers, configured or not
    pub fn confirmer_names(&self) -> impl Iterator<Item = &str> {
        self.confirmers.keys().map(String::as_str)
    }

    fn ensure_showable(&self, name: &str) -> DialogResult<()> {
        match self.confirmers.get(name) {
            None => Err(DialogError::NotFound(name.to_string())),
            Some(c) if !c.is_configured() => Err(DialogError::NotConfigured(name.to_string())),
            Some(_) => Ok(()),
        }
    }

    /// Select a confirmer for display, replacing any previously shown one
    pub fn show(&mut self, name: &str, params: Params) -> DialogResult<()> {
        self.ensure_showable(name)?;
        log::debug!("Showing confirmer \"{name}\"");
        self.active = Some(ActiveConfirmation::new(name.to_string(), params));
        Ok(())
    }

    /// Confirmer currently selected for display
    pub fn active(&self) -> Option<ActiveConfirmer<'_>> {
        let confirmation = self.active.as_ref()?;
        let confirmer = self.confirmers.get(&confirmation.name)?;
        Some(ActiveConfirmer {
            confirmer,
            confirmation,
        })
    }

    /// Clear the active confirmer and mark rendered dialog output as stale
    pub fn reset(&mut self) {
        self.active = None;
        self.redraw_requested = true;
    }

    /// Whether a reset happened since the last render
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Dynamically named signal receiver, see [`SignalRouter::dispatch`]
    pub fn handle_signal(&mut self, signal: &str, params: Params) -> DialogResult<SignalDispatch> {
        SignalRouter::dispatch(self, signal, params)
    }

    fn take_active(&mut self, name: &str, token: Uuid) -> DialogResult<ActiveConfirmation> {
        match self.active.take() {
            Some(active) if active.name == name && active.token == token => {
                self.reset();
                Ok(active)
            }
            Some(active) if active.name == name => {
                self.active = Some(active);
                Err(DialogError::InvalidToken(name.to_string()))
            }
            other => {
                self.active = other;
                Err(DialogError::NoActiveConfirmation(name.to_string()))
            }
        }
    }

    /// User confirmed: run the handler with the stored params, then reset.
    ///
    /// The dialog is reset even when the handler fails.
    pub fn confirm(&mut self, name: &str, token: Uuid) -> DialogResult<()> {
        let confirmation = self.take_active(name, token)?;
        log::debug!("Confirmer \"{name}\" confirmed");
        self.confirmers
            .get(name)
            .ok_or_else(|| DialogError::NotFound(name.to_string()))?
            .call_handler(&confirmation.params)
    }

    /// User declined: reset without running the handler
    pub fn cancel(&mut self, name: &str, token: Uuid) -> DialogResult<()> {
        self.take_active(name, token)?;
        log::debug!("Confirmer \"{name}\" cancelled");
        Ok(())
    }

    /// Render the dialog through the host's adapter.
    ///
    /// A pending redraw request is cleared once the adapter succeeds.
    pub fn render(&mut self, adapter: &dyn RenderAdapter) -> DialogResult<String> {
        let output = {
            let active = self.active();
            let template_path = active
                .and_then(|a| a.confirmer.template_file())
                .unwrap_or_else(|| self.template_file());
            let ctx = RenderContext {
                active,
                layout_path: self.layout_file(),
                template_path,
                ajax: active.map_or(self.use_ajax, |a| a.confirmer.is_ajax()),
                redraw: self.redraw_requested,
            };
            adapter.render(&ctx)?
        };
        self.redraw_requested = false;
        Ok(output)
    }

    /// Session key of this dialog's pending confirmation
    pub fn session_key(&self) -> String {
        format!("{SESSION_NAMESPACE}/{}", self.component_path)
    }

    /// Whether any confirmer renders as a full page and so needs session continuity.
    ///
    /// Confirmers keep the AJAX mode they were created with, so the registry's
    /// current mode alone does not decide this.
    fn uses_session(&self) -> bool {
        !self.use_ajax || self.confirmers.values().any(|c| !c.is_ajax())
    }

    /// Persist the active confirmation so it survives a full page reload.
    ///
    /// Only confirmers rendered without AJAX are stored. Clears the stored entry
    /// when nothing such is active, and is a no-op when every confirmer uses AJAX.
    pub async fn save_to_session(&self, store: &dyn SessionStore) -> DialogResult<()> {
        if !self.uses_session() {
            return Ok(());
        }
        let key = self.session_key();
        match self.active() {
            Some(active) if !active.confirmer.is_ajax() => {
                store
                    .put(&key, serde_json::to_value(active.confirmation)?)
                    .await
            }
            _ => store.remove(&key).await,
        }
    }

    /// Re-activate a confirmation persisted by a previous request.
    ///
    /// Call after registering confirmers. Returns `true` when a confirmation was
    /// restored. Expired entries and entries naming a confirmer that is no longer
    /// configured, or that now uses AJAX, are dropped from the store.
    pub async fn restore_from_session(&mut self, store: &dyn SessionStore) -> DialogResult<bool> {
        if !self.uses_session() {
            return Ok(false);
        }
        let key = self.session_key();
        let Some(value) = store.get(&key).await? else {
            return Ok(false);
        };
        let pending: ActiveConfirmation = serde_json::from_value(value)?;

        if pending.is_expired(self.pending_ttl_secs, Utc::now()) {
            log::warn!(
                "Dropping expired pending confirmation \"{}\" for {}",
                pending.name,
                self.component_path
            );
            store.remove(&key).await?;
            return Ok(false);
        }
        if let Err(e) = self.ensure_showable(&pending.name) {
            log::warn!("Dropping stale pending confirmation: {e}");
            store.remove(&key).await?;
            return Ok(false);
        }
        if self
            .confirmers
            .get(&pending.name)
            .is_some_and(Confirmer::is_ajax)
        {
            log::warn!(
                "Dropping pending confirmation \"{}\": confirmer now uses AJAX",
                pending.name
            );
            store.remove(&key).await?;
            return Ok(false);
        }

        self.active = Some(pending);
        Ok(true)
    }
}
