//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `layout` hosts the authenticated `/app` area and gates its outlet on the
//! session; the rest are individual routes.

pub mod clubs;
pub mod cockpit;
pub mod layout;
pub mod login;
pub mod profile;
pub mod public;
