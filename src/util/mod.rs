//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and browser concerns from page logic to
//! improve reuse and testability.

pub mod auth;
pub mod avatar;
pub mod format;
pub mod guard;
pub mod redirect;
