//! Typed asynchronous HTTP client for a single configured backend.
//!
//! # Overview
//! `RequestClient` builds URLs (endpoint + path + query string) and issues
//! GET/POST/PUT/DELETE calls, resolving each to exactly one typed value or
//! one `ApiError`.
//!
//! # Design
//! - The endpoint lives in an immutable `ApiConfig` injected at construction.
//! - Each verb is split into `build_*` (pure, produces an `HttpRequest`) and
//!   `parse_*` (pure, consumes an `HttpResponse`); the network round-trip in
//!   between goes through the `Transport` trait.
//! - Cancellation is an explicit `CancellationToken` passed to the
//!   `*_with_cancel` variants. There is no built-in timeout or retry.
//! - Query strings are not percent-encoded.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::RequestClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{query, HttpMethod, HttpRequest, HttpResponse, QueryParams};
pub use tokio_util::sync::CancellationToken;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Credentials, LoginResponse, LOGIN_PATH};
