//! Process configuration, read once from the environment at startup.
//! Used by: main, state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::cors::AllowList;
use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://lab11-front-end.vercel.app",
    "http://localhost:3000",
    "http://localhost:5173",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: AllowList,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = match lookup("HOST").filter(|h| !h.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<IpAddr>()
                .map_err(|_| Error::Config(format!("HOST must be an IP address, got {raw:?}")))?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got {raw:?}")))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host,
            port,
            allowed_origins: AllowList::new(ALLOWED_ORIGINS)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
