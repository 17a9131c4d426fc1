//! Plain-data HTTP types shared by the client and its transports.
//!
//! # Design
//! Requests and responses are described as owned values. `RequestClient`
//! builds an `HttpRequest`, hands it to a `Transport`, and interprets the
//! returned `HttpResponse`. Keeping the shaping and the I/O apart lets tests
//! inspect exactly what would go over the wire without a server.

use std::fmt;

/// Ordered query parameters. Rendered in insertion order.
pub type QueryParams = Vec<(String, String)>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: endpoint, path and (for GET) the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Transports return every status as data; only `RequestClient` decides
/// what counts as failure.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Build `QueryParams` from borrowed pairs.
///
/// ```
/// let params = api_client::query(&[("name", "bob"), ("age", "2")]);
/// assert_eq!(params[1], ("age".to_string(), "2".to_string()));
/// ```
pub fn query(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
