//! 类型定义模块

mod active;
mod config;
mod confirmer;

pub use active::{ActiveConfirmation, ActiveConfirmer};
pub use config::{DialogConfig, DEFAULT_LAYOUT_FILE, DEFAULT_PENDING_TTL_SECS, DEFAULT_TEMPLATE_FILE};
pub use confirmer::{
    confirm_handler, ConfirmHandler, Confirmer, DialogText, HandlerError, Params, TextCallback,
};
