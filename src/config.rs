use std::time::Duration;

/// Gateway configuration, loaded once at startup from the environment. The
/// gateway keeps no durable state, so there is no database section here —
/// every field either addresses the inbound listener or a downstream base
/// URL.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub reservation_url: String,
    pub payment_url: String,
    pub loyalty_url: String,

    /// Per-call timeout applied to every outbound downstream request.
    pub downstream_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let port = getenv("PORT", "8080");
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            field: "PORT",
            value: port,
        })?;

        let timeout_ms = getenv("DOWNSTREAM_TIMEOUT_MS", "5000");
        let timeout_ms: u64 = timeout_ms.parse().map_err(|_| ConfigError::Invalid {
            field: "DOWNSTREAM_TIMEOUT_MS",
            value: timeout_ms,
        })?;

        Ok(Self {
            host: getenv("HOST", "0.0.0.0"),
            port,
            reservation_url: getenv("RESERVATION_URL", "http://reservation-service:8070"),
            payment_url: getenv("PAYMENT_URL", "http://payment-service:8060"),
            loyalty_url: getenv("LOYALTY_URL", "http://loyalty-service:8050"),
            downstream_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn getenv(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_combines_host_and_port() {
        let cfg = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            reservation_url: String::new(),
            payment_url: String::new(),
            loyalty_url: String::new(),
            downstream_timeout: Duration::from_secs(5),
        };
        assert_eq!(cfg.addr(), "0.0.0.0:8080");
    }
}