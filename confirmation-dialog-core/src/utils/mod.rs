//! Utility helpers

pub mod datetime;
pub mod naming;
