//! Authentication module for managing the session token.
//!
//! This module provides:
//! - `TokenStore`: durable, file-backed storage for the session token
//! - `url::extract_token`: pulling a token out of an email-link URL
//!
//! Tokens never expire client-side; expiry is the backend's business and
//! shows up as a failed request.

pub mod token_store;
pub mod url;

pub use token_store::TokenStore;
pub use url::extract_token;
