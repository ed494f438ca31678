//! Pattern 6: HTTP Middleware
//!
//! The closure chain from [`crate::chain`], with HTTP requests instead of
//! clicks. Every handler gets the request plus `next`, and returns the
//! response: it can answer on its own (auth failure), or call `next` and
//! do work around it (timing).
//!
//! The chain is synchronous. hyper and tokio only carry requests to it.

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Incoming;
use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::Result;

pub type Body = Full<Bytes>;

/// Request bodies above this size are refused before the chain runs.
pub const MAX_BODY_BYTES: usize = 10 << 20;

const ACCEPT_BACKOFF_START: Duration = Duration::from_millis(5);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// The rest of the chain, as seen by a handler.
pub type Next<'a, B> = &'a dyn Fn(&Request<B>) -> Response<Body>;

type Composed<B> = Box<dyn Fn(&Request<B>) -> Response<Body> + Send + Sync>;

pub struct Middleware<B> {
    chain: Option<Composed<B>>,
}

impl<B: 'static> Middleware<B> {
    /// A chain with no endpoint; answers `200 OK` with an empty body.
    pub fn empty() -> Self {
        Self { chain: None }
    }

    /// A chain ending in `endpoint`.
    pub fn new<E>(endpoint: E) -> Self
    where
        E: Fn(&Request<B>) -> Response<Body> + Send + Sync + 'static,
    {
        Self {
            chain: Some(Box::new(endpoint)),
        }
    }

    /// Wraps the current chain. The handler added last sees the request first.
    pub fn use_handler<H>(&mut self, handler: H)
    where
        H: Fn(&Request<B>, Next<'_, B>) -> Response<Body> + Send + Sync + 'static,
    {
        let old = self.chain.take();
        self.chain = Some(Box::new(move |req: &Request<B>| {
            let next = |req: &Request<B>| match &old {
                Some(old) => old(req),
                None => text_response(StatusCode::OK, ""),
            };
            handler(req, &next)
        }));
    }

    pub fn call(&self, req: &Request<B>) -> Response<Body> {
        match &self.chain {
            Some(chain) => chain(req),
            None => text_response(StatusCode::OK, ""),
        }
    }
}

impl<B: 'static> Default for Middleware<B> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// First value of `key` in the request form. A urlencoded POST, PUT or
/// PATCH body is searched before the query string.
pub fn form_value<B: AsRef<[u8]>>(req: &Request<B>, key: &str) -> Option<String> {
    let body = has_form_body(req).then(|| AsRef::<[u8]>::as_ref(req.body()));
    let query = req.uri().query().map(str::as_bytes);
    body.into_iter()
        .chain(query)
        .find_map(|input| first_value(input, key))
}

fn has_form_body<B>(req: &Request<B>) -> bool {
    let is_form = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        });
    is_form && [Method::POST, Method::PUT, Method::PATCH].contains(req.method())
}

fn first_value(input: &[u8], key: &str) -> Option<String> {
    url::form_urlencoded::parse(input)
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.into_owned())
}

fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Body> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

/// Plain-text error whose body is the status reason, e.g. `Unauthorized\n`.
pub fn error_response(status: StatusCode) -> Response<Body> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut response = text_response(status, format!("{reason}\n"));
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

pub fn hello<B>(_req: &Request<B>) -> Response<Body> {
    text_response(StatusCode::OK, "Hello!")
}

/// Stops the chain with 401 unless the request carries `user=admin`.
pub fn require_admin<B: AsRef<[u8]>>(req: &Request<B>, next: Next<'_, B>) -> Response<Body> {
    if form_value(req, "user").as_deref() != Some("admin") {
        return error_response(StatusCode::UNAUTHORIZED);
    }
    next(req)
}

/// Times the rest of the chain and logs one line per request.
pub fn log_duration<B>(req: &Request<B>, next: Next<'_, B>) -> Response<Body> {
    let start = Instant::now();
    let response = next(req);
    let duration = start.elapsed();
    info!("Path: {} Duration: {:?}", req.uri().path(), duration);
    response
}

/// `hello` behind logging, behind auth. Auth is registered last so it runs
/// first, and rejected requests are never timed or logged.
pub fn hello_stack<B: AsRef<[u8]> + 'static>() -> Middleware<B> {
    let mut stack = Middleware::new(hello::<B>);
    stack.use_handler(log_duration::<B>);
    stack.use_handler(require_admin::<B>);
    stack
}

// =============================================================================
// Server
// =============================================================================

/// Sends `/hello` through the stack; every other path is 404.
pub fn route<B: 'static>(stack: &Middleware<B>, req: &Request<B>) -> Response<Body> {
    match req.uri().path() {
        "/hello" => stack.call(req),
        _ => error_response(StatusCode::NOT_FOUND),
    }
}

pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener).await
}

/// Reads the whole body so the synchronous chain can see form fields.
async fn handle(stack: &Middleware<Bytes>, req: Request<Incoming>) -> Response<Body> {
    let (parts, body) = req.into_parts();
    match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => route(stack, &Request::from_parts(parts, collected.to_bytes())),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            error_response(StatusCode::PAYLOAD_TOO_LARGE)
        }
        Err(err) => {
            warn!("Failed to read request body: {err}");
            error_response(StatusCode::BAD_REQUEST)
        }
    }
}

/// Calls `accept` until it succeeds, sleeping between failures. The delay
/// starts at 5ms and doubles up to one second.
pub(crate) async fn accept_retrying<F, Fut, T>(mut accept: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    let mut delay = ACCEPT_BACKOFF_START;
    loop {
        match accept().await {
            Ok(conn) => return conn,
            Err(err) => {
                warn!("Accept failed: {err}; retrying in {delay:?}");
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(ACCEPT_BACKOFF_MAX);
            }
        }
    }
}

/// Accept loop over an already bound listener. Accept errors are logged and
/// retried; the loop only ends with the task.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let stack = Arc::new(hello_stack::<Bytes>());
    info!("Listening on http://{}", listener.local_addr()?);

    loop {
        let (tcp, peer) = accept_retrying(|| listener.accept()).await;
        let io = TokioIo::new(tcp);
        let stack = Arc::clone(&stack);

        tokio::task::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let stack = Arc::clone(&stack);
                async move { Ok::<_, Infallible>(handle(&stack, req).await) }
            });

            if let Err(err) = http1::Builder::new()
                .timer(TokioTimer::new())
                .serve_connection(io, service)
                .await
            {
                warn!(%peer, "Error serving connection: {:?}", err);
            }
        });
    }
}
