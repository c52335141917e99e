use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};

pub const PORT_ENV: &str = "EXCHANGE_RATE_API_PORT";
pub const DEFAULT_PORT: &str = ":8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(PORT_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        Ok(Self {
            addr: parse_listen_addr(&raw)?,
        })
    }
}

/// Accepts `:8000`, `8000`, `127.0.0.1:8000` or `localhost:8000`.
/// A missing host binds every interface.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidAddress {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (host, port) = match value.rsplit_once(':') {
        Some((host, port)) => (host, port),
        None => ("", value),
    };
    let port: u16 = port.parse().map_err(|_| invalid("invalid port"))?;

    if host.is_empty() {
        return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
    }

    (host.trim_start_matches('[').trim_end_matches(']'), port)
        .to_socket_addrs()
        .map_err(|e| invalid(&e.to_string()))?
        .next()
        .ok_or_else(|| invalid("host did not resolve"))
}
