//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notifications`, ...) so components
//! depend on small focused models. Only `session_store` writes `Session`.

pub mod external_profile;
pub mod join_requests;
pub mod notifications;
pub mod session;
pub mod session_store;

#[cfg(test)]
pub(crate) mod test_helpers;
