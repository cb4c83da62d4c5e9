//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` classifies their failures, and `types`
//! defines the wire schema the client inspects.

pub mod api;
pub mod error;
pub mod types;
