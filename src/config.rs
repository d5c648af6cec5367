//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `PORT`: listen port, default 3000
//!
//! Leptos options (site root, asset dir) come from `[package.metadata.leptos]`
//! or the `LEPTOS_*` variables cargo-leptos exports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_bind_addr(lookup("BIND_ADDR").as_deref())?,
            port: parse_port(lookup("PORT").as_deref())?,
        })
    }

    pub fn socket_addr(self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::InvalidConfig { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::InvalidConfig { var: "BIND_ADDR", value: value.to_owned() }),
    }
}
