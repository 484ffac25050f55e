//! Client-side stores: auth session, route access, language preference.
//!
//! ARCHITECTURE
//! ============
//! Each store is a plain state struct with explicit transition methods plus a
//! thin `Copy` handle over an `RwSignal`, provided via context at the app
//! root. Pages and guards read through the handle; only the handle's
//! operations write.

pub mod access;
pub mod auth;
pub mod language;
