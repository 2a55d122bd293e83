/* demos/demo.rs */

use origin_ip::{client_ip, is_internal_ip, parse_ipv4, private_range};
use std::collections::HashMap;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Client IP Resolution Examples ===\n");

    // Example 1: Proxy chain in X-Forwarded-For
    example_1_forwarded_chain();

    // Example 2: Placeholder values are skipped
    example_2_unknown_skipped();

    // Example 3: Fallback to remote address
    example_3_fallback();

    // Example 4: Classification
    example_4_classification();

    println!("=== All examples completed! ===");
}

fn example_1_forwarded_chain() {
    println!("Example 1: X-Forwarded-For with multiple hops");

    let mut headers = HashMap::new();
    headers.insert(
        "x-forwarded-for".to_string(),
        "203.0.113.1, 192.168.1.10, 10.0.0.5".to_string(),
    );

    match client_ip(&headers, None) {
        Some(ip) => println!("Resolved IP (first hop): {}", ip),
        None => println!("No IP found"),
    }
    println!();
}

fn example_2_unknown_skipped() {
    println!("Example 2: 'unknown' values are skipped");

    let mut headers = HashMap::new();
    headers.insert("X-Forwarded-For".to_string(), "unknown".to_string());
    headers.insert("WL-Proxy-Client-IP".to_string(), "198.51.100.42".to_string());

    match client_ip(&headers, None) {
        Some(ip) => println!("Resolved IP: {}", ip),
        None => println!("No IP found"),
    }
    println!();
}

fn example_3_fallback() {
    println!("Example 3: Fallback to remote address");

    let headers: HashMap<String, String> = HashMap::new();

    match client_ip(&headers, Some("192.0.2.123".to_string())) {
        Some(ip) => println!("Using fallback IP: {}", ip),
        None => println!("No IP found"),
    }
    match client_ip(&headers, None) {
        Some(ip) => println!("Unexpected IP: {}", ip),
        None => println!("Without a request context nothing is resolved"),
    }
    println!();
}

fn example_4_classification() {
    println!("Example 4: Internal or external");

    for text in ["10.0.0.1", "172.16.5.4", "172.32.0.1", "192.168.1.1", "8.8.8.8", "010.0.0.1"] {
        let range = parse_ipv4(text)
            .ok()
            .and_then(private_range)
            .map(|range| range.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<12} internal={:<5} range={}", text, is_internal_ip(text), range);
    }
    println!();
}
