//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome, notices, dialogs, and pagination
//! while reading/writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod nav_bar;
pub mod notice_bar;
pub mod pagination;
pub mod require_session;
