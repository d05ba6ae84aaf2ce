//! Render adapter Trait

use std::path::Path;

use crate::error::DialogResult;
use crate::types::ActiveConfirmer;

/// Everything the render layer gets to see
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Confirmer selected for display, if any
    pub active: Option<ActiveConfirmer<'a>>,
    /// Dialog layout template
    pub layout_path: &'a Path,
    /// Confirmer template
    pub template_path: &'a Path,
    /// Produce a partial (snippet) update instead of a full page
    pub ajax: bool,
    /// Previously rendered partial output is stale
    pub redraw: bool,
}

/// Render Adapter Trait
///
/// Implemented by the host's template engine. Returns `DialogError::MissingTemplate`
/// when a template path cannot be resolved.
pub trait RenderAdapter {
    /// Produce markup for the dialog
    fn render(&self, ctx: &RenderContext<'_>) -> DialogResult<String>;
}
