//! Confirmer factory Trait

use std::path::Path;

use crate::types::Confirmer;

/// Confirmer Factory Trait
///
/// Builds a fresh, unconfigured confirmer for a name. The registry calls it at most
/// once per name and applies its AJAX mode to the result, so implementations must not
/// touch registry state.
pub trait ConfirmerFactory: Send + Sync {
    /// Create a confirmer
    ///
    /// # Arguments
    /// * `name` - Confirmer name (already validated)
    /// * `template_file` - Template override configured on the owning dialog
    fn create(&self, name: &str, template_file: Option<&Path>) -> Confirmer;
}

/// Default factory producing plain `Confirmer` values
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfirmerFactory;

impl ConfirmerFactory for DefaultConfirmerFactory {
    fn create(&self, name: &str, template_file: Option<&Path>) -> Confirmer {
        Confirmer::new(name, template_file.map(Path::to_path_buf))
    }
}
