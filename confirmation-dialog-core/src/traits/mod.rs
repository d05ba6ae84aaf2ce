//! Collaborator trait definitions

mod confirmer_factory;
mod render_adapter;
mod session_store;

pub use confirmer_factory::{ConfirmerFactory, DefaultConfirmerFactory};
pub use render_adapter::{RenderAdapter, RenderContext};
pub use session_store::{InMemorySessionStore, SessionStore};
