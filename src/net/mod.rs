//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls and the global 401 policy; `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
