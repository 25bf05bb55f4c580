use crate::{ConfigError, FromEnv, env_parse_or};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the HTTP API listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Listen address of the HTTP API.
///
/// `HOST` must be an IP literal and defaults to every interface;
/// `PORT` defaults to [`DEFAULT_PORT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind the listener to
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_parse_or("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: env_parse_or("PORT", DEFAULT_PORT)?,
        })
    }
}
