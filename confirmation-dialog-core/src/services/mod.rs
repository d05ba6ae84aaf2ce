//! Dialog services: confirmer registry and signal routing

mod confirmation_dialog;
mod signal_router;

pub use confirmation_dialog::{ConfirmationDialog, SESSION_NAMESPACE};
pub use signal_router::{SignalDispatch, SignalRouter};
