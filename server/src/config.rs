//! Host server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so either source works.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::StartupError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidPort`] when `PORT` is set but is not a
    /// non-zero port number.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => parse_port(&raw)?,
        };
        Ok(Self { port })
    }

    /// Listen on all interfaces at the configured port.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, StartupError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(StartupError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}
