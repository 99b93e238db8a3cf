//! Wire DTOs for the course REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (`accessToken` is camelCase
//! on the wire) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account identity returned by `POST /login` and cached in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub username: String,
}

/// A course as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned unique identifier.
    pub id: i64,
    pub name: String,
    /// Credit count.
    pub credit: i64,
    pub category: String,
    pub teacher: String,
}

/// Request body for creating or replacing a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub credit: i64,
    pub category: String,
    pub teacher: String,
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            credit: course.credit,
            category: course.category.clone(),
            teacher: course.teacher.clone(),
        }
    }
}

/// Request body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: User,
}

/// Request body for `POST /register`. The confirmation field never leaves the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
