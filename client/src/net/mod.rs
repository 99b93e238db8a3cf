//! Networking modules for the course REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the shared JSON schema, and
//! `error` classifies request failures for user-facing notices.

pub mod api;
pub mod error;
pub mod types;
