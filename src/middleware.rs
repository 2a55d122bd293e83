/* src/middleware.rs */

use axum::{
    extract::{ConnectInfo, FromRequestParts, OptionalFromRequestParts, Request},
    http::{Extensions, HeaderMap, StatusCode, request::Parts},
    response::Response,
};
use futures_util::future::BoxFuture;
use std::{
    convert::Infallible,
    fmt,
    net::SocketAddr,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::classify::is_internal_ip;
use crate::error::Result;
use crate::ipv4::{Ipv4Address, parse_ipv4};
use crate::resolver::client_ip;

/// Extension that holds the resolved client address.
///
/// The value is the first hop found in the forwarding headers, or the peer
/// address of the connection. It is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the address is in a private range. Malformed text is not.
    pub fn is_internal(&self) -> bool {
        is_internal_ip(&self.0)
    }

    /// Parse the address as a strict dotted-quad.
    pub fn parse(&self) -> Result<Ipv4Address> {
        parse_ipv4(&self.0)
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layer for resolving client addresses of HTTP requests.
///
/// The forwarding headers of each request are examined and the result is
/// stored as a [`ClientIp`] request extension. The peer address from
/// `ConnectInfo<SocketAddr>` is the fallback, so serve the router with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use origin_ip::{ClientIp, ClientIpLayer};
///
/// async fn handler(ip: ClientIp) -> String {
///     format!("{} internal={}", ip, ip.is_internal())
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .layer(ClientIpLayer::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientIpLayer;

impl ClientIpLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ClientIpLayer {
    type Service = ClientIpService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientIpService { inner }
    }
}

/// Service that resolves client addresses.
#[derive(Debug, Clone)]
pub struct ClientIpService<S> {
    inner: S,
}

impl<S> Service<Request> for ClientIpService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        if let Some(ip) = resolve_request(req.headers(), req.extensions()) {
            tracing::trace!(ip = %ip, "client ip resolved");
            req.extensions_mut().insert(ip);
        }

        let future = self.inner.call(req);
        Box::pin(async move { future.await })
    }
}

fn resolve_request(headers: &HeaderMap, extensions: &Extensions) -> Option<ClientIp> {
    let remote = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip().to_string());

    client_ip(headers, remote).map(ClientIp)
}

fn from_parts(parts: &Parts) -> Option<ClientIp> {
    match parts.extensions.get::<ClientIp>() {
        Some(ip) => Some(ip.clone()),
        // The layer did not run; resolve here instead.
        None => resolve_request(&parts.headers, &parts.extensions),
    }
}

/// Axum extractor for the client address.
///
/// Rejects with `400 Bad Request` when neither a forwarding header nor
/// connection info is available. Use `Option<ClientIp>` to accept that case.
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        from_parts(parts).ok_or((
            StatusCode::BAD_REQUEST,
            "Could not determine client address",
        ))
    }
}

impl<S> OptionalFromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Option<Self>, Self::Rejection> {
        Ok(from_parts(parts))
    }
}
