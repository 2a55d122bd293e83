/* src/classify.rs */

use std::fmt;

use crate::ipv4::{Ipv4Address, parse_ipv4};

/// The RFC 1918 private address blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivateRange {
    /// `10.0.0.0/8`
    Net10,
    /// `172.16.0.0/12`
    Net172,
    /// `192.168.0.0/16`
    Net192,
}

impl PrivateRange {
    pub const ALL: [PrivateRange; 3] = [Self::Net10, Self::Net172, Self::Net192];

    /// Whether `addr` falls inside this block.
    pub fn contains(self, addr: Ipv4Address) -> bool {
        let [first, second, _, _] = addr.octets();
        match self {
            Self::Net10 => first == 10,
            Self::Net172 => first == 172 && (16..=31).contains(&second),
            Self::Net192 => first == 192 && second == 168,
        }
    }

    /// The block in CIDR notation.
    pub fn cidr(self) -> &'static str {
        match self {
            Self::Net10 => "10.0.0.0/8",
            Self::Net172 => "172.16.0.0/12",
            Self::Net192 => "192.168.0.0/16",
        }
    }
}

impl fmt::Display for PrivateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cidr())
    }
}

/// The private block containing `addr`, if any.
pub fn private_range(addr: Ipv4Address) -> Option<PrivateRange> {
    PrivateRange::ALL
        .into_iter()
        .find(|range| range.contains(addr))
}

/// Check if an address belongs to one of the RFC 1918 private blocks.
pub fn is_internal(addr: Ipv4Address) -> bool {
    PrivateRange::ALL.iter().any(|range| range.contains(addr))
}

/// Check if a dotted-quad names an internal address.
///
/// Text that does not parse as a strict dotted-quad is reported as `false`,
/// the same answer an external address gets. Callers that need to tell the
/// two apart should call [`parse_ipv4`] themselves.
///
/// # Examples
///
/// ```rust
/// use origin_ip::is_internal_ip;
///
/// assert!(is_internal_ip("192.168.1.1"));
/// assert!(!is_internal_ip("8.8.8.8"));
/// assert!(!is_internal_ip("not-an-ip"));
/// ```
pub fn is_internal_ip(text: &str) -> bool {
    match parse_ipv4(text) {
        Ok(addr) => is_internal(addr),
        Err(err) => {
            tracing::warn!(error = %err, "treating malformed address as external");
            false
        }
    }
}
