//! REST API client module for the StudyDesk backend.
//!
//! This module provides the `ApiClient` for talking to the backend over
//! HTTP: authentication, document upload, question generation, YouTube
//! summarization, past-paper analysis, and summary CRUD.
//!
//! The API uses bearer token authentication; the token is obtained from
//! the login/signup endpoints and attached to every request unless a
//! call opts out.

pub mod client;
pub mod error;

pub use client::{ApiClient, FileUpload, RequestBody, RequestOptions, ResponseBody};
pub use error::{error_message, ApiError};
