/* src/resolver.rs */

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Headers checked for the client address, in order of preference.
pub const CANDIDATE_HEADERS: [&str; 11] = [
    "X-Forwarded-For",
    "Proxy-Client-IP",
    "WL-Proxy-Client-IP",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "HTTP_VIA",
    "REMOTE_ADDR",
];

/// Placeholder some proxies write when they do not know the client.
const UNKNOWN: &str = "unknown";

/// Read access to the headers of the current request.
///
/// Names are passed exactly as they appear in [`CANDIDATE_HEADERS`];
/// the implementation decides how to match case. The implementations in
/// this crate match case-insensitively, as HTTP does.
pub trait HeaderLookup {
    /// The raw value of header `name`, or `None` if it is not present.
    fn header(&self, name: &str) -> Option<String>;
}

impl<F> HeaderLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn header(&self, name: &str) -> Option<String> {
        self(name)
    }
}

impl<S: BuildHasher> HeaderLookup for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<String> {
        if let Some(value) = self.get(name) {
            return Some(value.clone());
        }
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

#[cfg(feature = "axum")]
impl HeaderLookup for axum::http::HeaderMap {
    fn header(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

/// Resolve the client address from forwarding headers.
///
/// The first header in [`CANDIDATE_HEADERS`] holding a usable value wins.
/// Empty values and `unknown` (any case) are skipped. When the value is a
/// proxy chain such as `client, proxy1, proxy2` only the first hop is
/// returned. If no header is usable, `remote_fallback` is returned as is.
///
/// The returned text is not validated; pass it to
/// [`parse_ipv4`](crate::parse_ipv4) when an address is required.
pub fn resolve<L>(lookup: &L, remote_fallback: Option<String>) -> Option<String>
where
    L: HeaderLookup + ?Sized,
{
    for name in CANDIDATE_HEADERS {
        let Some(value) = lookup.header(name) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(UNKNOWN) {
            continue;
        }

        let first_hop = value.split(',').next().unwrap_or(value).trim();
        tracing::debug!(header = name, ip = first_hop, "client ip from header");
        return Some(first_hop.to_string());
    }

    match remote_fallback {
        Some(remote) => {
            tracing::debug!(ip = %remote, "client ip from remote address");
            Some(remote)
        }
        None => {
            tracing::debug!("no forwarding header and no remote address");
            None
        }
    }
}

/// Resolve the client address of a request.
///
/// `lookup` reads request headers and `remote_fallback` is the peer address
/// of the connection, or `None` outside of a request.
///
/// # Examples
///
/// ```rust
/// use origin_ip::client_ip;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "x-forwarded-for".to_string(),
///     "203.0.113.7, 10.0.0.5".to_string(),
/// );
///
/// let ip = client_ip(&headers, Some("10.0.0.5".to_string()));
/// assert_eq!(ip.as_deref(), Some("203.0.113.7"));
/// ```
pub fn client_ip<L>(lookup: &L, remote_fallback: Option<String>) -> Option<String>
where
    L: HeaderLookup + ?Sized,
{
    resolve(lookup, remote_fallback)
}
