//! Confirmation Dialog Core Library
//!
//! Provides the state layer of a reusable confirmation dialog component:
//! - Named confirmer registry (`ConfirmationDialog`)
//! - Dynamically named signal dispatch (`SignalRouter`)
//! - Session persistence of pending confirmations
//!
//! Rendering, session storage and confirmer construction are abstracted through traits,
//! so the host framework plugs in its own template engine and session backend.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{DialogError, DialogResult};
pub use services::{ConfirmationDialog, SignalDispatch, SignalRouter};
pub use traits::{ConfirmerFactory, RenderAdapter, SessionStore};
