//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `course_list`, forms, notices) so
//! individual pages and components depend on small focused models that are
//! testable without a browser.

pub mod auth_form;
pub mod course_form;
pub mod course_list;
pub mod notice;
pub mod session;
