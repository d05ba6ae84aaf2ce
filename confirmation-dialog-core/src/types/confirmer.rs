//! Confirmer type definitions

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DialogError, DialogResult};

/// Per-invocation parameters (`mapping<string, any>`)
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Error returned by a confirmation handler
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Callback invoked once the user confirms
pub type ConfirmHandler = Arc<dyn Fn(&Params) -> Result<(), HandlerError> + Send + Sync>;

/// Callback producing question/heading text at render time
pub type TextCallback = Arc<dyn Fn(&Confirmer, &Params) -> String + Send + Sync>;

/// Wrap a closure as a `ConfirmHandler`
pub fn confirm_handler<F>(f: F) -> ConfirmHandler
where
    F: Fn(&Params) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Question or heading text: either fixed or computed from the invocation params.
#[derive(Clone)]
pub enum DialogText {
    Literal(String),
    Computed(TextCallback),
}

impl DialogText {
    /// Wrap a closure as computed text
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Confirmer, &Params) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Produce the final text. Computed variants run only here.
    pub fn resolve(&self, confirmer: &Confirmer, params: &Params) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Computed(f) => f(confirmer, params),
        }
    }
}

impl fmt::Debug for DialogText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for DialogText {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for DialogText {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Handler, question and heading are only ever set together.
#[derive(Clone)]
struct ConfirmerConfig {
    handler: ConfirmHandler,
    question: DialogText,
    heading: DialogText,
}

/// A single named confirmation prompt
#[derive(Clone)]
pub struct Confirmer {
    name: String,
    template_file: Option<PathBuf>,
    ajax_enabled: bool,
    config: Option<ConfirmerConfig>,
}

impl Confirmer {
    /// Create an unconfigured confirmer
    #[must_use]
    pub fn new(name: impl Into<String>, template_file: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            template_file,
            ajax_enabled: false,
            config: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template used to render this confirmer, if overridden
    pub fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    pub fn is_ajax(&self) -> bool {
        self.ajax_enabled
    }

    pub fn enable_ajax(&mut self) {
        self.ajax_enabled = true;
    }

    pub fn disable_ajax(&mut self) {
        self.ajax_enabled = false;
    }

    /// Whether handler, question and heading have been set
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Set handler, question and heading in one step.
    ///
    /// Write-once: a configured confirmer rejects further configuration and keeps its state.
    pub fn configure(
        &mut self,
        handler: ConfirmHandler,
        question: DialogText,
        heading: DialogText,
    ) -> DialogResult<()> {
        if self.config.is_some() {
            return Err(DialogError::AlreadyConfigured(self.name.clone()));
        }
        self.config = Some(ConfirmerConfig {
            handler,
            question,
            heading,
        });
        Ok(())
    }

    pub fn question(&self) -> Option<&DialogText> {
        self.config.as_ref().map(|c| &c.question)
    }

    pub fn heading(&self) -> Option<&DialogText> {
        self.config.as_ref().map(|c| &c.heading)
    }

    pub fn handler(&self) -> Option<&ConfirmHandler> {
        self.config.as_ref().map(|c| &c.handler)
    }

    /// Resolve the question text for the given params
    pub fn resolve_question(&self, params: &Params) -> Option<String> {
        self.question().map(|q| q.resolve(self, params))
    }

    /// Resolve the heading text for the given params
    pub fn resolve_heading(&self, params: &Params) -> Option<String> {
        self.heading().map(|h| h.resolve(self, params))
    }

    /// Invoke the confirmation handler
    pub fn call_handler(&self, params: &Params) -> DialogResult<()> {
        let handler = self
            .handler()
            .ok_or_else(|| DialogError::NotConfigured(self.name.clone()))?;
        handler(params).map_err(|e| DialogError::HandlerFailed {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

impl fmt::Debug for Confirmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirmer")
            .field("name", &self.name)
            .field("template_file", &self.template_file)
            .field("ajax_enabled", &self.ajax_enabled)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn noop() -> ConfirmHandler {
        confirm_handler(|_| Ok(()))
    }

    #[test]
    fn new_confirmer_is_unconfigured() {
        let c = Confirmer::new("deleteItem", None);
        assert!(!c.is_configured());
        assert!(c.question().is_none());
        assert!(c.heading().is_none());
        assert!(c.handler().is_none());
    }

    #[test]
    fn configure_sets_all_fields() {
        let mut c = Confirmer::new("deleteItem", None);
        c.configure(noop(), "Really delete?".into(), "Delete".into())
            .unwrap();

        assert!(c.is_configured());
        let params = Params::new();
        assert_eq!(c.resolve_question(&params).as_deref(), Some("Really delete?"));
        assert_eq!(c.resolve_heading(&params).as_deref(), Some("Delete"));
    }

    #[test]
    fn configure_twice_keeps_first_state() {
        let mut c = Confirmer::new("x", None);
        c.configure(noop(), "first".into(), "First".into()).unwrap();

        let err = c
            .configure(noop(), "second".into(), "Second".into())
            .unwrap_err();
        assert!(matches!(err, DialogError::AlreadyConfigured(ref n) if n == "x"));
        assert_eq!(c.resolve_question(&Params::new()).as_deref(), Some("first"));
    }

    #[test]
    fn computed_text_sees_confirmer_and_params() {
        let mut c = Confirmer::new("deleteItem", None);
        let question = DialogText::computed(|confirmer, params| {
            format!("{}: item {}?", confirmer.name(), params["id"])
        });
        c.configure(noop(), question, "Delete".into()).unwrap();

        let mut params = Params::new();
        params.insert("id".to_string(), json!(42));
        assert_eq!(
            c.resolve_question(&params).as_deref(),
            Some("deleteItem: item 42?")
        );
    }

    #[test]
    fn handler_error_is_wrapped() {
        let mut c = Confirmer::new("x", None);
        let failing = confirm_handler(|_| Err("boom".into()));
        c.configure(failing, "q".into(), "h".into()).unwrap();

        let err = c.call_handler(&Params::new()).unwrap_err();
        assert!(
            matches!(err, DialogError::HandlerFailed { ref name, ref message } if name == "x" && message == "boom")
        );
    }

    #[test]
    fn handler_on_unconfigured_confirmer_fails() {
        let c = Confirmer::new("x", None);
        assert!(matches!(
            c.call_handler(&Params::new()),
            Err(DialogError::NotConfigured(_))
        ));
    }
}
