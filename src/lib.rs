/* src/lib.rs */
//! # Origin IP
//!
//! Resolve the originating client address of an HTTP request through the
//! forwarding headers written by proxies, and classify IPv4 addresses as
//! internal (RFC 1918) or external.
//!
//! ## Features
//!
//! - Fixed, ordered list of forwarding headers with a remote-address fallback
//! - Only the first hop of a proxy chain is returned
//! - Strict dotted-quad parsing (no leading zeros, no partial results)
//! - Classification against `10.0.0.0/8`, `172.16.0.0/12` and `192.168.0.0/16`
//! - Optional Axum middleware and extractor via the `axum` feature
//!
//! The resolved address is taken from the request as is. Nothing here
//! authenticates proxy headers, so do not use it for security decisions
//! unless the proxies in front of the service overwrite them.
//!
//! ## Examples
//!
//! ```rust
//! use origin_ip::{client_ip, is_internal_ip};
//! use std::collections::HashMap;
//!
//! let mut headers = HashMap::new();
//! headers.insert("X-Forwarded-For".to_string(), "10.1.2.3, 172.16.0.1".to_string());
//!
//! let ip = client_ip(&headers, Some("172.16.0.1".to_string())).unwrap();
//! assert_eq!(ip, "10.1.2.3");
//! assert!(is_internal_ip(&ip));
//! ```

pub mod classify;
pub mod error;
pub mod ipv4;
pub mod resolver;

#[cfg(feature = "axum")]
pub mod middleware;

pub use classify::{PrivateRange, is_internal, is_internal_ip, private_range};
pub use error::{IpError, Malformed, Result};
pub use ipv4::{Ipv4Address, parse_ipv4};
pub use resolver::{CANDIDATE_HEADERS, HeaderLookup, client_ip, resolve};

#[cfg(feature = "axum")]
pub use middleware::{ClientIp, ClientIpLayer, ClientIpService};
