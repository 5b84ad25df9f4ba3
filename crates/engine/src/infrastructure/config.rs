//! Engine configuration from environment variables.

const DEFAULT_DATABASE_URL: &str = "sqlite:tavern.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Insert the Core Rulebook catalogue at startup.
    pub seed_catalogue: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            seed_catalogue: true,
        }
    }
}

impl EngineConfig {
    /// Read the process environment. Unset or invalid values use defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            seed_catalogue: lookup("SEED_CATALOGUE")
                .map(|v| is_enabled(&v))
                .unwrap_or(defaults.seed_catalogue),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), EngineConfig::default());
        assert_eq!(EngineConfig::default().bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        assert_eq!(config(&[("PORT", "8080")]).server_port, 8080);
        assert_eq!(
            config(&[("SERVER_PORT", "9000"), ("PORT", "8080")]).server_port,
            9000
        );
    }

    #[test]
    fn invalid_numbers_use_defaults() {
        let cfg = config(&[("SERVER_PORT", "http"), ("DATABASE_MAX_CONNECTIONS", "0")]);
        assert_eq!(cfg.server_port, DEFAULT_PORT);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn seeding_can_be_disabled() {
        assert!(!config(&[("SEED_CATALOGUE", "false")]).seed_catalogue);
        assert!(config(&[("SEED_CATALOGUE", "yes")]).seed_catalogue);
        assert!(!config(&[("SEED_CATALOGUE", " OFF ")]).seed_catalogue);
        assert!(!config(&[("SEED_CATALOGUE", "0")]).seed_catalogue);
    }
}
