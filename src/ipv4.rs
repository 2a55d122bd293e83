/* src/ipv4.rs */

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{IpError, Malformed, Result};

const OCTET_COUNT: usize = 4;
const DELIMITER: char = '.';

/// An IPv4 address as four octets, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Address([u8; OCTET_COUNT]);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// The four octets in left-to-right order.
    pub const fn octets(&self) -> [u8; OCTET_COUNT] {
        self.0
    }
}

impl From<[u8; OCTET_COUNT]> for Ipv4Address {
    fn from(octets: [u8; OCTET_COUNT]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl FromStr for Ipv4Address {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self> {
        parse_ipv4(s)
    }
}

/// Parse a strict dotted-quad such as `192.168.1.1`.
///
/// Exactly four `.`-separated parts of one to three decimal digits are
/// accepted, each at most 255. Multi-digit parts may not start with `0`,
/// and surrounding whitespace is not stripped.
///
/// # Examples
///
/// ```rust
/// use origin_ip::{parse_ipv4, Ipv4Address};
///
/// assert_eq!(parse_ipv4("10.0.0.1"), Ok(Ipv4Address::new(10, 0, 0, 1)));
/// assert!(parse_ipv4("10.0.0.01").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Address> {
    let part_count = text.split(DELIMITER).count();
    if part_count != OCTET_COUNT {
        return Err(IpError::malformed(text, Malformed::PartCount(part_count)));
    }

    let mut octets = [0u8; OCTET_COUNT];
    for (slot, part) in octets.iter_mut().zip(text.split(DELIMITER)) {
        *slot = parse_octet(part).map_err(|reason| IpError::malformed(text, reason))?;
    }

    Ok(Ipv4Address(octets))
}

fn parse_octet(part: &str) -> std::result::Result<u8, Malformed> {
    let length = part.chars().count();
    if length == 0 || length > 3 {
        return Err(Malformed::OctetLength(length));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Malformed::NonDigit);
    }
    if length > 1 && part.starts_with('0') {
        return Err(Malformed::LeadingZero);
    }

    let value = part
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    u8::try_from(value).map_err(|_| Malformed::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str) -> Malformed {
        parse_ipv4(text).unwrap_err().reason()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_ipv4("0.0.0.0"), Ok(Ipv4Address::new(0, 0, 0, 0)));
        assert_eq!(
            parse_ipv4("255.255.255.255"),
            Ok(Ipv4Address::new(255, 255, 255, 255))
        );
        assert_eq!(
            parse_ipv4("203.0.113.7"),
            Ok(Ipv4Address::new(203, 0, 113, 7))
        );
        assert_eq!(parse_ipv4("1.20.100.9").unwrap().octets(), [1, 20, 100, 9]);
    }

    #[test]
    fn test_parse_part_count() {
        assert_eq!(reason("1.2.3"), Malformed::PartCount(3));
        assert_eq!(reason("1.2.3.4.5"), Malformed::PartCount(5));
        assert_eq!(reason(""), Malformed::PartCount(1));
        assert_eq!(reason("not-an-ip"), Malformed::PartCount(1));
    }

    #[test]
    fn test_parse_octet_length() {
        assert_eq!(reason("1..3.4"), Malformed::OctetLength(0));
        assert_eq!(reason("1.2.3."), Malformed::OctetLength(0));
        assert_eq!(reason("1.2.3.1000"), Malformed::OctetLength(4));
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(reason("1.2.3.a"), Malformed::NonDigit);
        assert_eq!(reason("1.2.3.+4"), Malformed::NonDigit);
        assert_eq!(reason(" 1.2.3.4"), Malformed::NonDigit);
        assert_eq!(reason("1.2.3.4 "), Malformed::NonDigit);
        assert_eq!(reason("1.2.3.٣"), Malformed::NonDigit);
    }

    #[test]
    fn test_parse_leading_zero() {
        assert_eq!(reason("01.2.3.4"), Malformed::LeadingZero);
        assert_eq!(reason("1.2.3.00"), Malformed::LeadingZero);
        assert_eq!(reason("10.0.0.010"), Malformed::LeadingZero);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(reason("256.0.0.1"), Malformed::OutOfRange(256));
        assert_eq!(reason("1.2.3.999"), Malformed::OutOfRange(999));
    }

    #[test]
    fn test_display_round_trip() {
        let addr = Ipv4Address::new(172, 16, 5, 4);
        assert_eq!(addr.to_string(), "172.16.5.4");
        assert_eq!(addr.to_string().parse::<Ipv4Address>(), Ok(addr));
    }

    #[test]
    fn test_std_conversion() {
        let std_addr = Ipv4Addr::new(192, 168, 1, 1);
        let addr = Ipv4Address::from(std_addr);
        assert_eq!(addr.octets(), [192, 168, 1, 1]);
        assert_eq!(Ipv4Addr::from(addr), std_addr);
    }
}
