use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpError {
    #[error("Invalid IP address: {0}")]
    Invalid(String),
}

/// Body of the caller-address endpoint and of the public echo service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpResponse {
    pub ip: String,
}

impl From<IpAddr> for IpResponse {
    fn from(ip: IpAddr) -> Self {
        Self { ip: ip.to_string() }
    }
}

/// Parse an address, tolerating a `[v6]` literal and an attached port
pub fn parse_ip(input: &str) -> Result<IpAddr, IpError> {
    let trimmed = input.trim();
    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Ok(ip);
    }

    let unbracketed = match trimmed.strip_prefix('[') {
        Some(rest) => rest.split_once(']').map(|(host, _)| host),
        None => trimmed.rsplit_once(':').map(|(host, _)| host),
    };

    unbracketed
        .and_then(|host| host.parse::<IpAddr>().ok())
        .ok_or_else(|| IpError::Invalid(input.to_string()))
}

/// Address of the original caller behind proxies
///
/// First valid entry of `X-Forwarded-For`, then `X-Real-IP`, then the socket peer.
pub fn client_ip(forwarded_for: Option<&str>, real_ip: Option<&str>, peer: IpAddr) -> IpAddr {
    forwarded_for
        .and_then(|value| value.split(',').find_map(|entry| parse_ip(entry).ok()))
        .or_else(|| real_ip.and_then(|value| parse_ip(value).ok()))
        .unwrap_or(peer)
}
