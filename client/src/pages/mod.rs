//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and validation/filtering to `state`.

pub mod auth;
pub mod course_editor;
pub mod home;
pub mod list;
