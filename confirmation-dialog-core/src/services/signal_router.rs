//! Dynamically named signal routing
//!
//! A signal `confirm<Name>` addresses the confirmer `<name>` (first character
//! lower-cased). Any other signal belongs to the host's default handling.

use super::confirmation_dialog::ConfirmationDialog;
use crate::error::{DialogError, DialogResult};
use crate::types::Params;
use crate::utils::naming;

/// Outcome of routing one inbound signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalDispatch {
    /// Not a confirmer signal; the host should handle it
    PassThrough,
    /// The named confirmer is now active
    Shown { name: String },
}

/// Maps `confirm<Name>` signals onto the confirmer registry
pub struct SignalRouter;

impl SignalRouter {
    /// Case-sensitive prefix marking a confirmer signal
    pub const PREFIX: &'static str = "confirm";

    /// Whether the signal carries the confirmer prefix
    pub fn is_confirmer_signal(signal: &str) -> bool {
        signal.starts_with(Self::PREFIX)
    }

    /// Recover the confirmer name from a signal.
    ///
    /// `None` when the prefix is absent. Anything after the prefix is accepted here,
    /// so `"confirmation"` decodes to `"ation"`; validity is checked at dispatch.
    pub fn decode(signal: &str) -> Option<String> {
        signal
            .strip_prefix(Self::PREFIX)
            .map(naming::lowercase_first)
    }

    /// Build the signal that shows the confirmer `name`
    pub fn encode(name: &str) -> String {
        format!("{}{}", Self::PREFIX, naming::uppercase_first(name))
    }

    /// Route a signal to the dialog.
    ///
    /// Foreign signals pass through untouched. A confirmer signal whose target is not
    /// configured fails with `InvalidSignalTarget` so the host can answer with an error.
    pub fn dispatch(
        dialog: &mut ConfirmationDialog,
        signal: &str,
        params: Params,
    ) -> DialogResult<SignalDispatch> {
        let Some(name) = Self::decode(signal) else {
            return Ok(SignalDispatch::PassThrough);
        };

        if let Err(e) = dialog.confirmer(&name) {
            log::warn!("Rejecting signal \"{signal}\": {e}");
            return Err(DialogError::InvalidSignalTarget(name));
        }

        dialog.show(&name, params)?;
        Ok(SignalDispatch::Shown { name })
    }
}
