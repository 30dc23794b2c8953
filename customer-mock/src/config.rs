use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// customer-mock 配置，从环境变量读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 监听地址
    pub bind_addr: IpAddr,
    /// 服务端口
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                expected: "an IP address",
                value: raw,
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("HTTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "HTTP_PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => 8080,
        };

        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "BIND_ADDR" => Some("127.0.0.1".into()),
            "HTTP_PORT" => Some("3001".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_bad_port() {
        let err = Config::from_lookup(|key| (key == "HTTP_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP_PORT must be a port number, got 'http'");
    }
}
