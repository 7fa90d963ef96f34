use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::bucket::TokenBucket;
use crate::config::ConnectionConfig;
use crate::error::RequestError;
use crate::reader;
use crate::retry::RetryPolicy;

/// HTTP method of an endpoint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET, no payload.
    Get,
    /// POST with an optional payload.
    Post,
}

/// URL root an endpoint request resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// `https://{host}/api/v{version}/`
    Api,
    /// `https://{host}/oauth/`
    OAuth,
}

/// Request payload: body bytes plus their content type.
#[derive(Debug, Clone)]
pub struct Payload {
    body: String,
    content_type: String,
}

impl Payload {
    /// JSON payload serialized from `value`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] if `value` cannot be serialized.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, RequestError> {
        let body = serde_json::to_string(value)
            .map_err(|err| RequestError::Decode(format!("serialize: {err}")))?;
        Ok(Self {
            body,
            content_type: "application/json".into(),
        })
    }

    /// Form-urlencoded payload from an already-encoded body.
    pub fn form(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: "application/x-www-form-urlencoded".into(),
        }
    }

    /// Payload with an explicit content type.
    pub fn new(body: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

/// A logical request to one endpoint: target path, method, and optional
/// payload. Immutable, built per call, not retained beyond it.
#[derive(Debug, Clone)]
pub struct EndpointRequest {
    base: Base,
    path: String,
    method: Method,
    payload: Option<Payload>,
}

impl EndpointRequest {
    /// GET request for a path relative to the API base.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            base: Base::Api,
            path: path.into(),
            method: Method::Get,
            payload: None,
        }
    }

    /// POST request for a path relative to the API base.
    pub fn post(path: impl Into<String>, payload: Payload) -> Self {
        Self {
            base: Base::Api,
            path: path.into(),
            method: Method::Post,
            payload: Some(payload),
        }
    }

    /// Resolves the request against the OAuth root instead of the API base.
    #[must_use]
    pub const fn on_oauth(mut self) -> Self {
        self.base = Base::OAuth;
        self
    }

    fn url(&self, api_url: &str, oauth_url: &str) -> String {
        match self.base {
            Base::Api => format!("{api_url}{}", self.path),
            Base::OAuth => format!("{oauth_url}{}", self.path),
        }
    }
}

/// Result of [`Executor::submit`]: a future resolving to the transformed
/// response or a classified error.
///
/// The underlying work runs on a spawned task and proceeds whether or not the
/// submission is awaited.
#[derive(Debug)]
pub struct Submission<T> {
    inner: Inner<T>,
}

#[derive(Debug)]
enum Inner<T> {
    Ready(Option<Result<T, RequestError>>),
    Task(JoinHandle<Result<T, RequestError>>),
}

impl<T> Submission<T> {
    pub(crate) fn ready(result: Result<T, RequestError>) -> Self {
        Self {
            inner: Inner::Ready(Some(result)),
        }
    }

    const fn task(handle: JoinHandle<Result<T, RequestError>>) -> Self {
        Self {
            inner: Inner::Task(handle),
        }
    }
}

// No field is ever pinned through self-reference, so moving a polled
// Submission is sound regardless of T.
impl<T> Unpin for Submission<T> {}

impl<T> Future for Submission<T> {
    type Output = Result<T, RequestError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match &mut this.inner {
            Inner::Ready(slot) => Poll::Ready(slot.take().expect("submission polled after completion")),
            Inner::Task(handle) => match Pin::new(handle).poll(cx) {
                Poll::Ready(Ok(result)) => Poll::Ready(result),
                Poll::Ready(Err(join_err)) => {
                    if join_err.is_panic() {
                        std::panic::resume_unwind(join_err.into_panic());
                    }
                    Poll::Ready(Err(RequestError::ConnectionClosed))
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

struct Shared {
    http: reqwest::Client,
    api_url: String,
    oauth_url: String,
    headers: HeaderMap,
    bucket: TokenBucket,
    retry: RetryPolicy,
    cancel: CancellationToken,
    closed: AtomicBool,
}

/// Grants graceful-shutdown rights to a task, without handing it the whole
/// executor.
pub(crate) struct ShutdownHandle {
    shared: Arc<Shared>,
}

impl ShutdownHandle {
    /// Stops accepting submissions; in-flight work runs to completion.
    pub(crate) fn shutdown(&self) {
        self.shared.closed.store(true, Ordering::Release);
        tracing::info!("connection scheduled for graceful shutdown");
    }
}

/// The request execution core: turns an [`EndpointRequest`] into a
/// rate-limited, retryable, asynchronously executed network operation.
///
/// Work is spawned onto the tokio runtime; the task pool is unbounded but
/// paired with the token bucket, which bounds outstanding network I/O.
/// Retries are sequential, and every attempt, including retries, acquires a
/// rate token before touching the network.
pub struct Executor {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("api_url", &self.shared.api_url)
            .field("closed", &self.shared.closed.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

impl Executor {
    /// Builds an executor from connection parameters and an optional bearer
    /// token. Performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// token is not a legal header value.
    pub(crate) fn new(config: &ConnectionConfig, token: Option<&str>) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            shared: Arc::new(Shared {
                http,
                api_url: config.api_url(),
                oauth_url: config.oauth_url(),
                headers: config.headers(token)?,
                bucket: TokenBucket::new(config.rate()),
                retry: config.retry(),
                cancel: CancellationToken::new(),
                closed: AtomicBool::new(false),
            }),
        })
    }

    /// Submits a request whose response body deserializes from JSON.
    ///
    /// Returns immediately; the work runs on a pooled task.
    pub fn submit<O>(&self, request: EndpointRequest) -> Submission<O>
    where
        O: DeserializeOwned + Send + 'static,
    {
        self.submit_with(request, |bytes| {
            serde_json::from_slice(&bytes).map_err(|err| crate::error::map_deser(&err, &bytes))
        })
    }

    /// Submits a request with an explicit transform from body bytes to the
    /// result type.
    ///
    /// If the connection is already closed, the returned submission resolves
    /// immediately with [`RequestError::ConnectionClosed`] and no network
    /// I/O happens.
    pub fn submit_with<T, F>(&self, request: EndpointRequest, transform: F) -> Submission<T>
    where
        T: Send + 'static,
        F: FnOnce(Bytes) -> Result<T, RequestError> + Send + 'static,
    {
        if self.is_closed() {
            return Submission::ready(Err(RequestError::ConnectionClosed));
        }

        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let cancelled = shared.cancel.clone();
            tokio::select! {
                () = cancelled.cancelled() => Err(RequestError::ConnectionClosed),
                result = run(&shared, &request) => result.and_then(transform),
            }
        });
        Submission::task(handle)
    }

    /// Forcibly closes the connection: cancels queued and in-flight work and
    /// rejects further submissions. Idempotent.
    pub fn close(&self) {
        if !self.shared.closed.swap(true, Ordering::AcqRel) {
            tracing::info!("connection closed");
        }
        self.shared.cancel.cancel();
    }

    /// Whether the connection no longer accepts submissions.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    pub(crate) fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Runs the attempt loop for one submission.
///
/// Per attempt: acquire a rate token, perform the HTTP call, read the body.
/// On a retryable failure within the policy's attempt cap, wait the fixed
/// backoff delay and go around again; otherwise surface the error.
async fn run(shared: &Shared, request: &EndpointRequest) -> Result<Bytes, RequestError> {
    let url = request.url(&shared.api_url, &shared.oauth_url);
    let attempts = AtomicU32::new(0);
    let attempts = &attempts;
    let url_ref = &url;

    backoff::future::retry(shared.retry.backoff(), || async move {
        shared.bucket.acquire(1).await;
        tracing::debug!(url = %url_ref, "dispatching request");

        match attempt(shared, request, url_ref).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                let made = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                if shared.retry.should_retry(&err, made) {
                    tracing::warn!(error = %err, attempt = made, "request failed, retrying");
                    Err(backoff::Error::transient(err))
                } else {
                    Err(backoff::Error::Permanent(err))
                }
            }
        }
    })
    .await
}

async fn attempt(
    shared: &Shared,
    request: &EndpointRequest,
    url: &str,
) -> Result<Bytes, RequestError> {
    let mut builder = match request.method {
        Method::Get => shared.http.get(url),
        Method::Post => shared.http.post(url),
    };
    builder = builder.headers(shared.headers.clone());
    if let Some(payload) = &request.payload {
        builder = builder
            .header(CONTENT_TYPE, payload.content_type.clone())
            .body(payload.body.clone());
    }

    let response = builder.send().await?;
    reader::read_body(response, url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_urls_resolve_against_their_base() {
        let req = EndpointRequest::get("user/show/abc");
        assert_eq!(
            req.url("https://h/api/v1/", "https://h/oauth/"),
            "https://h/api/v1/user/show/abc"
        );

        let req = EndpointRequest::get("revoke").on_oauth();
        assert_eq!(
            req.url("https://h/api/v1/", "https://h/oauth/"),
            "https://h/oauth/revoke"
        );
    }

    #[test]
    fn json_payload_defaults_to_json_content_type() {
        let payload = Payload::json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(payload.content_type, "application/json");
        assert_eq!(payload.body, r#"{"a":1}"#);
    }

    #[test]
    fn form_payload_content_type() {
        let payload = Payload::form("a=1&b=2");
        assert_eq!(payload.content_type, "application/x-www-form-urlencoded");
    }
}
