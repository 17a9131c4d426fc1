//! Typed request client for a single configured backend.
//!
//! # Design
//! `RequestClient` holds the endpoint configuration and a `Transport`; it
//! carries no mutable state between calls. Each verb is split into a pure
//! `build_*` method producing an `HttpRequest` and a shared `parse_*` step
//! consuming the `HttpResponse`. The async `get`/`post`/`put`/`delete`
//! methods glue the two halves around one transport round-trip.
//!
//! Query strings are rendered verbatim: keys and values are not
//! percent-encoded. Callers passing `&`, `=`, `#` or spaces must encode them
//! first.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::transport::{ReqwestTransport, Transport};

/// Asynchronous, stateless client for one endpoint.
///
/// Every call is an independent single-shot exchange: no retries, no
/// caching, no ordering between concurrent calls.
#[derive(Debug, Clone)]
pub struct RequestClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl RequestClient<ReqwestTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> RequestClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `""` for no parameters, otherwise `?k1=v1&k2=v2` in insertion order.
    pub fn create_query_string(&self, params: &[(String, String)]) -> String {
        if params.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("?{}", pairs.join("&"))
    }

    pub fn create_url(&self, path: &str, params: &[(String, String)]) -> String {
        format!(
            "{}{path}{}",
            self.config.endpoint(),
            self.create_query_string(params)
        )
    }

    pub fn build_get(&self, path: &str, params: &QueryParams) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.create_url(path, params),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.build_with_body(HttpMethod::Post, path, body)
    }

    pub fn build_put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.build_with_body(HttpMethod::Put, path, body)
    }

    pub fn build_delete(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.create_url(path, &[]),
            headers: Vec::new(),
            body: None,
        }
    }

    fn build_with_body<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: self.create_url(path, &[]),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Decode a 2xx response body into `R`. An empty body decodes as `null`.
    pub fn parse_json<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Accept any 2xx response and discard its body.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Execute one built request, resolving to `Cancelled` if `cancel`
    /// fires first.
    pub async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, ApiError> {
        self.dispatch(request, Some(cancel)).await
    }

    async fn dispatch(
        &self,
        request: HttpRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "dispatching request");

        let result = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(ApiError::Cancelled),
                    result = self.transport.execute(request) => result,
                }
            }
            None => self.transport.execute(request).await,
        };

        match &result {
            Ok(response) => debug!(%method, %url, status = response.status, "request completed"),
            Err(err) => debug!(%method, %url, error = %err, "request failed"),
        }
        result
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<R, ApiError> {
        let response = self.dispatch(self.build_get(path, params), None).await?;
        self.parse_json(response)
    }

    pub async fn get_with_cancel<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
        cancel: &CancellationToken,
    ) -> Result<R, ApiError> {
        let response = self.send(self.build_get(path, params), cancel).await?;
        self.parse_json(response)
    }

    /// POST `body` as JSON to `endpoint + path`. Never appends a query string.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(self.build_post(path, body)?, None).await?;
        self.parse_json(response)
    }

    pub async fn post_with_cancel<B, R>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(self.build_post(path, body)?, cancel).await?;
        self.parse_json(response)
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(self.build_put(path, body)?, None).await?;
        self.parse_json(response)
    }

    pub async fn put_with_cancel<B, R>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(self.build_put(path, body)?, cancel).await?;
        self.parse_json(response)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.dispatch(self.build_delete(path), None).await?;
        self.parse_empty(response)
    }

    pub async fn delete_with_cancel(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        let response = self.send(self.build_delete(path), cancel).await?;
        self.parse_empty(response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
