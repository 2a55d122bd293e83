/* tests/middleware.rs */

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::ConnectInfo,
    http::{Request, StatusCode},
    routing::get,
};
use origin_ip::{ClientIp, ClientIpLayer};
use std::net::SocketAddr;
use tower::ServiceExt;

async fn show(ip: ClientIp) -> String {
    ip.to_string()
}

async fn show_optional(ip: Option<ClientIp>) -> String {
    ip.map(|ip| ip.0).unwrap_or_else(|| "none".to_string())
}

async fn internal(ip: ClientIp) -> String {
    ip.is_internal().to_string()
}

fn app() -> Router {
    Router::new()
        .route("/", get(show))
        .route("/optional", get(show_optional))
        .route("/internal", get(internal))
        .layer(ClientIpLayer::new())
}

fn request(uri: &str, headers: &[(&str, &str)], peer: Option<SocketAddr>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let mut req = builder.body(Body::empty()).unwrap();
    if let Some(peer) = peer {
        req.extensions_mut().insert(ConnectInfo(peer));
    }
    req
}

async fn send(router: Router, req: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn peer() -> Option<SocketAddr> {
    Some(SocketAddr::from(([10, 0, 0, 5], 41000)))
}

#[tokio::test]
async fn test_forwarded_header_wins() {
    let req = request("/", &[("X-Forwarded-For", "203.0.113.7, 10.0.0.5")], peer());
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "203.0.113.7");
}

#[tokio::test]
async fn test_underscore_header() {
    let req = request("/", &[("HTTP_CLIENT_IP", "198.51.100.3")], peer());
    let (_, body) = send(app(), req).await;
    assert_eq!(body, "198.51.100.3");
}

#[tokio::test]
async fn test_peer_address_fallback() {
    let req = request("/", &[("X-Forwarded-For", "unknown")], peer());
    let (_, body) = send(app(), req).await;
    assert_eq!(body, "10.0.0.5");
}

#[tokio::test]
async fn test_internal_classification() {
    let req = request("/internal", &[("Proxy-Client-IP", "192.168.4.4")], None);
    let (_, body) = send(app(), req).await;
    assert_eq!(body, "true");

    let req = request("/internal", &[("Proxy-Client-IP", "8.8.8.8")], None);
    let (_, body) = send(app(), req).await;
    assert_eq!(body, "false");
}

#[tokio::test]
async fn test_nothing_to_resolve() {
    let (status, _) = send(app(), request("/", &[], None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(app(), request("/optional", &[], None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "none");
}

#[tokio::test]
async fn test_extractor_without_layer() {
    let router = Router::new().route("/", get(show));
    let req = request("/", &[], peer());
    let (_, body) = send(router, req).await;
    assert_eq!(body, "10.0.0.5");
}
