use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Bind address of the HTTP server, taken from `CERTIAI_HOST` /
/// `CERTIAI_PORT` with local defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> ServerConfig {
        ServerConfig::from_vars(env::var("CERTIAI_HOST").ok(), env::var("CERTIAI_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> ServerConfig {
        ServerConfig {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = ServerConfig::from_vars(Some("0.0.0.0".to_string()), Some("not-a-port".to_string()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn explicit_values_win() {
        let config = ServerConfig::from_vars(Some("0.0.0.0".to_string()), Some("9090".to_string()));
        assert_eq!(config.url(), "http://0.0.0.0:9090");
    }
}
