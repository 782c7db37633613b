use std::net::SocketAddr;

use serde::Deserialize;
use fastzero_core::error::{FastZeroError, Result};
use fastzero_core::service::DEFAULT_MAX_FIELD_BYTES;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub users: UsersSection,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            users: UsersSection::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FastZeroError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.users.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FastZeroError::Config(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersSection {
    #[serde(default = "default_max_field_bytes")]
    pub max_field_bytes: usize,
}

impl Default for UsersSection {
    fn default() -> Self {
        Self {
            max_field_bytes: default_max_field_bytes(),
        }
    }
}

impl UsersSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=4096).contains(&self.max_field_bytes) {
            return Err(FastZeroError::Config(
                "users.max_field_bytes must be between 1 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_field_bytes() -> usize {
    DEFAULT_MAX_FIELD_BYTES
}
