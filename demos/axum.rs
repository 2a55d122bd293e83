/* demos/axum.rs */

use axum::{Router, extract::ConnectInfo, response::Json, routing::get};
use origin_ip::{ClientIp, ClientIpLayer, private_range};
use serde_json::json;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_app();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    println!("Server starting on http://localhost:3000");
    println!("Test endpoints:");
    println!("  • GET /       - JSON response with the resolved client IP");
    println!("  • GET /debug  - Resolved IP next to the connection info");
    println!();
    println!("Test with headers:");
    println!("  curl -H 'X-Forwarded-For: 198.51.100.1, 192.168.1.1' http://localhost:3000/");
    println!("  curl -H 'Proxy-Client-IP: 10.1.2.3' http://localhost:3000/");
    println!("  curl -H 'X-Forwarded-For: unknown' http://localhost:3000/debug");
    println!();

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

fn create_app() -> Router {
    Router::new()
        .route("/", get(ip_handler))
        .route("/debug", get(debug_handler))
        .layer(ClientIpLayer::new())
}

/// Handler that returns the resolved IP and its classification
async fn ip_handler(client_ip: ClientIp) -> Json<serde_json::Value> {
    let range = client_ip
        .parse()
        .ok()
        .and_then(private_range)
        .map(|range| range.to_string());

    Json(json!({
        "client_ip": client_ip.as_str(),
        "is_internal": client_ip.is_internal(),
        "private_range": range,
    }))
}

/// Debug handler showing the resolved IP next to the peer address
async fn debug_handler(
    client_ip: ClientIp,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Json<serde_json::Value> {
    Json(json!({
        "client_ip": client_ip.as_str(),
        "remote_addr": addr.to_string(),
        "ip_source": if client_ip.as_str() == addr.ip().to_string() {
            "connection_fallback"
        } else {
            "header"
        },
    }))
}
