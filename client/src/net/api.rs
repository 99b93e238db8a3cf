//! REST API helpers for the course backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the
//! backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the response body so
//! callers can surface the server-reported reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Course, CourseDraft, LoginRequest, LoginResponse, RegisterRequest};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_at(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    endpoint_at(&crate::config::api_base_url(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn course_path(id: i64) -> String {
    format!("/courses/{id}")
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<T>().await?)
}

/// Exchange credentials for an access token via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the credentials,
/// or the response is not a valid login payload.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/login"))
            .json(request)?
            .send()
            .await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the account.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/register"))
            .json(request)?
            .send()
            .await?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full course collection from `GET /courses`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a course array.
pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/courses")).send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one course from `GET /courses/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the course does not exist.
pub async fn fetch_course(id: i64) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&course_path(id))).send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a course via `POST /courses`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the draft.
pub async fn create_course(draft: &CourseDraft) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/courses"))
            .json(draft)?
            .send()
            .await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Replace a course via `PUT /courses/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the update.
pub async fn update_course(id: i64, draft: &CourseDraft) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&endpoint(&course_path(id)))
            .json(draft)?
            .send()
            .await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a course via `DELETE /courses/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the delete.
pub async fn delete_course(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(&course_path(id))).send().await?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
