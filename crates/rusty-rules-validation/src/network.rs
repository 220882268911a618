//! IP address and URL validators

use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family selected by the `valid_ip` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
    /// Anything other than `ipv4` / `ipv6`, including no parameter
    Any,
}

impl IpFamily {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("ipv4") => IpFamily::V4,
            Some("ipv6") => IpFamily::V6,
            _ => IpFamily::Any,
        }
    }
}

fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

/// Validates an IP address, optionally restricted to one family
pub fn valid_ip(value: &str, param: Option<&str>) -> bool {
    match IpFamily::from_param(param) {
        IpFamily::V4 => is_ipv4(value),
        IpFamily::V6 => is_ipv6(value),
        IpFamily::Any => is_ipv4(value) || is_ipv6(value),
    }
}

/// URL validation (RFC 3986 via the `url` crate)
pub fn valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
