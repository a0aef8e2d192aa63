//! API client for communicating with the StudyDesk backend.
//!
//! This module provides the `ApiClient` struct, the single point of HTTP
//! access to the backend. It owns the session token, attaches it to
//! outgoing requests as a bearer credential, and normalizes responses
//! and errors for callers.

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenStore;
use crate::config::Config;
use crate::models::{AuthResponse, SummariesResponse, Summary, UserProfile};

use super::error::{self, error_message, ApiError};

/// Request body accepted by [`ApiClient::request`].
///
/// JSON bodies arrive here already serialized to text; the client only
/// negotiates headers and dispatches. Multipart forms are passed through
/// untouched so the transport can pick the boundary.
pub enum RequestBody {
    Json(String),
    Multipart(Form),
}

/// Per-request options for [`ApiClient::request`].
///
/// `Default` gives an unauthenticated-opt-in GET with no body and no
/// header overrides, so call sites only spell out what differs.
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
    pub skip_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
            skip_auth: false,
        }
    }
}

/// Parsed response returned by [`ApiClient::request`].
///
/// The client does not impose a response schema: bodies with a JSON
/// content type are parsed, everything else is returned as text.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Narrow to an endpoint-declared shape.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => Err(ApiError::InvalidResponse(format!(
                "expected a JSON response, got text: {}",
                error::truncate_text(&text, 200)
            ))),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// File payload for multipart endpoints (document upload, question
/// generation, profile pictures, past-paper analysis).
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, using its final path component as the
    /// multipart file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Path has no usable file name: {}", path.display()))?
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { file_name, bytes })
    }

    fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

/// Client for the StudyDesk backend API.
///
/// Holds the base URL (fixed at construction) and the session token,
/// which is mirrored to durable storage through a [`TokenStore`]. Token
/// state is read at request-build time, so mutating the token never
/// affects requests already in flight.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    store: TokenStore,
}

impl ApiClient {
    /// Create a new client, loading any persisted token from the store.
    /// No network call is made.
    pub fn new(base_url: impl Into<String>, store: TokenStore) -> Result<Self> {
        let client = Client::builder().build()?;
        let token = store.load().context("Failed to load persisted token")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
            store,
        })
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = TokenStore::new(config.data_dir()?);
        Self::new(config.base_url(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a session token in memory and durable storage. An absent,
    /// empty, or whitespace-only value clears storage instead; the store
    /// trims on load, so anything else would vanish on reconstruction.
    pub fn set_token(&mut self, token: Option<&str>) -> Result<()> {
        match token.map(str::trim) {
            Some(value) if !value.is_empty() => {
                self.token = Some(value.to_string());
                self.store.save(value).context("Failed to persist token")?;
            }
            _ => self.clear_token()?,
        }
        Ok(())
    }

    /// Remove the token from memory and durable storage. Idempotent.
    pub fn clear_token(&mut self) -> Result<()> {
        self.token = None;
        self.store.clear().context("Failed to clear persisted token")
    }

    /// True iff a non-empty token is currently held. Pure query.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Issue a request against `base_url + endpoint`.
    ///
    /// Attaches `Authorization: Bearer <token>` when a token is held and
    /// `skip_auth` is false. Multipart bodies are sent without an explicit
    /// `Content-Type` (the transport sets the boundary); other requests
    /// default to `application/json` unless the caller supplied one.
    ///
    /// Non-2xx responses become [`ApiError::Http`] with the message
    /// resolved by [`error_message`]. The token is never mutated on
    /// failure; whether a 401 ends the session is the caller's call.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<ResponseBody> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(
            url = %url,
            method = %options.method,
            authenticated = self.is_authenticated(),
            "Sending API request"
        );

        let mut headers = options.headers;
        if !options.skip_auth {
            if let Some(ref token) = self.token {
                headers.insert(
                    header::AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", token))
                        .map_err(ApiError::from)?,
                );
            }
        }

        let is_multipart = matches!(options.body, Some(RequestBody::Multipart(_)));
        if is_multipart {
            // Let the transport set multipart/form-data with its boundary
            headers.remove(header::CONTENT_TYPE);
        } else if !headers.contains_key(header::CONTENT_TYPE) {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        let mut builder = self.client.request(options.method, &url).headers(headers);
        builder = match options.body {
            Some(RequestBody::Json(text)) => builder.body(text),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        let body = if is_json {
            let value: Value = serde_json::from_str(&text)
                .map_err(ApiError::from)
                .with_context(|| format!("Invalid JSON response from {}", url))?;
            ResponseBody::Json(value)
        } else {
            ResponseBody::Text(text)
        };

        if !status.is_success() {
            warn!(url = %url, status = %status, "API request failed");
            let message = error_message(body.as_json(), status);
            return Err(ApiError::Http { status, message }.into());
        }

        Ok(body)
    }

    // ===== Auth endpoints =====

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .request(
                "/auth/login",
                RequestOptions {
                    method: Method::POST,
                    body: Some(RequestBody::Json(body.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        response.into_json().context("Failed to parse login response")
    }

    pub async fn signup(&self, email: &str, password: &str, full_name: &str) -> Result<AuthResponse> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "full_name": full_name,
        });
        let response = self
            .request(
                "/auth/signup",
                RequestOptions {
                    method: Method::POST,
                    body: Some(RequestBody::Json(body.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        response.into_json().context("Failed to parse signup response")
    }

    /// End the session. The token is cleared whether or not the backend
    /// call succeeds; a failed call is still surfaced to the caller.
    pub async fn logout(&mut self) -> Result<ResponseBody> {
        let result = self
            .request(
                "/auth/logout",
                RequestOptions {
                    method: Method::POST,
                    ..Default::default()
                },
            )
            .await;

        let cleared = self.clear_token();
        let body = result?;
        cleared?;
        Ok(body)
    }

    // ===== Document endpoints =====

    pub async fn upload_document(&self, file: FileUpload) -> Result<ResponseBody> {
        let form = Form::new().part("file", file.into_part());
        self.request(
            "/documents/upload",
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Multipart(form)),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn generate_questions_from_document(
        &self,
        file: FileUpload,
        num_questions: u32,
    ) -> Result<ResponseBody> {
        let form = Form::new()
            .part("file", file.into_part())
            .text("num_questions", num_questions.to_string());
        self.request(
            "/documents/generate-questions",
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Multipart(form)),
                ..Default::default()
            },
        )
        .await
    }

    // ===== Profile endpoints =====

    pub async fn update_profile_picture(&self, file: FileUpload) -> Result<ResponseBody> {
        let form = Form::new().part("file", file.into_part());
        self.request(
            "/users/profile-picture",
            RequestOptions {
                method: Method::PUT,
                body: Some(RequestBody::Multipart(form)),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn get_profile(&self) -> Result<UserProfile> {
        let response = self.request("/users/profile", RequestOptions::default()).await?;
        response.into_json().context("Failed to parse profile response")
    }

    pub async fn update_profile(&self, full_name: &str) -> Result<UserProfile> {
        let body = serde_json::json!({ "full_name": full_name });
        let response = self
            .request(
                "/users/profile",
                RequestOptions {
                    method: Method::PUT,
                    body: Some(RequestBody::Json(body.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        response.into_json().context("Failed to parse profile response")
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ResponseBody> {
        let body = serde_json::json!({
            "current_password": current_password,
            "new_password": new_password,
        });
        self.request(
            "/users/change-password",
            RequestOptions {
                method: Method::PUT,
                body: Some(RequestBody::Json(body.to_string())),
                ..Default::default()
            },
        )
        .await
    }

    // ===== YouTube endpoints =====

    pub async fn summarize_youtube(
        &self,
        video_url: &str,
        chunk_minutes: u32,
        target_language: &str,
    ) -> Result<ResponseBody> {
        let body = serde_json::json!({
            "video_url": video_url,
            "chunk_minutes": chunk_minutes,
            "target_language": target_language,
        });
        self.request(
            "/youtube/summarize",
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Json(body.to_string())),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn youtube_transcript(&self, video_url: &str) -> Result<ResponseBody> {
        let body = serde_json::json!({ "video_url": video_url });
        self.request(
            "/youtube/transcript",
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Json(body.to_string())),
                ..Default::default()
            },
        )
        .await
    }

    // ===== Past-paper endpoints =====

    pub async fn analyze_past_papers(
        &self,
        study_material: FileUpload,
        past_paper: FileUpload,
        num_questions: u32,
    ) -> Result<ResponseBody> {
        let form = Form::new()
            .part("study_material_file", study_material.into_part())
            .part("past_paper_file", past_paper.into_part())
            .text("num_questions", num_questions.to_string());
        self.request(
            "/past-papers/analyze",
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Multipart(form)),
                ..Default::default()
            },
        )
        .await
    }

    // ===== Summary endpoints =====

    pub async fn summaries(&self) -> Result<SummariesResponse> {
        let response = self.request("/summaries", RequestOptions::default()).await?;
        response.into_json().context("Failed to parse summaries response")
    }

    pub async fn summary(&self, summary_id: i64) -> Result<Summary> {
        let response = self
            .request(&format!("/summaries/{}", summary_id), RequestOptions::default())
            .await?;
        response.into_json().context("Failed to parse summary response")
    }

    pub async fn create_summary(&self, summary: &Value) -> Result<Summary> {
        let response = self
            .request(
                "/summaries",
                RequestOptions {
                    method: Method::POST,
                    body: Some(RequestBody::Json(summary.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        response.into_json().context("Failed to parse summary response")
    }

    pub async fn update_summary(&self, summary_id: i64, update: &Value) -> Result<Summary> {
        let response = self
            .request(
                &format!("/summaries/{}", summary_id),
                RequestOptions {
                    method: Method::PUT,
                    body: Some(RequestBody::Json(update.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        response.into_json().context("Failed to parse summary response")
    }

    pub async fn delete_summary(&self, summary_id: i64) -> Result<ResponseBody> {
        self.request(
            &format!("/summaries/{}", summary_id),
            RequestOptions {
                method: Method::DELETE,
                ..Default::default()
            },
        )
        .await
    }

    pub async fn search_summaries(&self, query: &str) -> Result<SummariesResponse> {
        let endpoint = format!("/summaries/search/?query={}", urlencoding::encode(query));
        let response = self.request(&endpoint, RequestOptions::default()).await?;
        response.into_json().context("Failed to parse summaries response")
    }
}
