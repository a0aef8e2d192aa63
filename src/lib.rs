//! StudyDesk client library.
//!
//! A client for the StudyDesk study-assistant backend. The library owns
//! the session-token lifecycle and provides one HTTP access point, the
//! [`ApiClient`], plus typed models for the endpoints whose shapes are
//! part of the backend contract.
//!
//! ```no_run
//! use studydesk::{ApiClient, Config};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let mut client = ApiClient::from_config(&config)?;
//!
//! let auth = client.login("ada@example.com", "hunter2").await?;
//! if let Some(token) = auth.access_token.as_deref() {
//!     client.set_token(Some(token))?;
//! }
//!
//! let summaries = client.summaries().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Logging goes through `tracing`; the library installs no subscriber,
//! that is the consumer's job.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, FileUpload, RequestBody, RequestOptions, ResponseBody};
pub use auth::{extract_token, TokenStore};
pub use config::Config;
pub use models::{AuthResponse, SummariesResponse, Summary, UserProfile};
