// secrets
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

pub static SECRET_MANAGER: Lazy<SecretManager> =
    Lazy::new(|| SecretManager::from_lookup(|key| env::var(key).ok()));

const DEFAULT_CORS_ORIGINS: &str = "https://music-player-demo.onrender.com,http://localhost:5173";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dev,
    Prod,
}

pub struct SecretManager {
    mode: Mode,
    secrets: HashMap<String, String>,
}

impl SecretManager {
    /// Builds the secret table from `lookup`, filling in local development
    /// defaults for anything the environment leaves unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("MODE") {
            Some(mode) if mode.to_lowercase() == "prod" => Mode::Prod,
            _ => Mode::Dev,
        };

        let defaults: [(&str, &str); 9] = [
            ("MYSQLHOST", "localhost"),
            ("MYSQLPORT", "3306"),
            ("MYSQLUSER", "root"),
            ("MYSQLPASSWORD", ""),
            ("MYSQLDATABASE", "music_player_db"),
            ("DB_MAX_CONNECTIONS", "10"),
            ("PORT", "5000"),
            ("CORS_ORIGINS", DEFAULT_CORS_ORIGINS),
            ("RUN_MIGRATIONS", "true"),
        ];

        let mut secrets: HashMap<String, String> = HashMap::new();
        for (key, default) in defaults {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            secrets.insert(key.to_string(), value);
        }

        // Log which secrets are configured (NOT their values!)
        let mut configured: Vec<&str> = secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        configured.sort_unstable();
        info!("Secrets configured ({:?} mode): {:?}", mode, configured);

        SecretManager { mode, secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Refuses to start a production deployment that would connect without a password.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mode() == Mode::Prod && self.get("MYSQLPASSWORD").is_empty() {
            anyhow::bail!("MYSQLPASSWORD must be set in production mode");
        }
        Ok(())
    }

    pub fn port(&self) -> u16 {
        self.parsed("PORT", 5000)
    }

    pub fn mysql_port(&self) -> u16 {
        self.parsed("MYSQLPORT", 3306)
    }

    pub fn max_connections(&self) -> u32 {
        self.parsed("DB_MAX_CONNECTIONS", 10)
    }

    pub fn run_migrations(&self) -> bool {
        self.parsed("RUN_MIGRATIONS", true)
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.get("CORS_ORIGINS")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn parsed<T: FromStr + std::fmt::Display>(&self, key: &str, default: T) -> T {
        let raw = self.get(key);
        match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid value {:?} for {}, using {}", raw, key, default);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(pairs: &[(&str, &str)]) -> SecretManager {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SecretManager::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_local_mysql() {
        let secrets = manager(&[]);
        assert_eq!(secrets.mode(), Mode::Dev);
        assert_eq!(secrets.get("MYSQLHOST"), "localhost");
        assert_eq!(secrets.mysql_port(), 3306);
        assert_eq!(secrets.get("MYSQLUSER"), "root");
        assert_eq!(secrets.get("MYSQLDATABASE"), "music_player_db");
        assert_eq!(secrets.port(), 5000);
        assert_eq!(secrets.max_connections(), 10);
        assert!(secrets.run_migrations());
        assert_eq!(
            secrets.cors_origins(),
            vec![
                "https://music-player-demo.onrender.com".to_string(),
                "http://localhost:5173".to_string(),
            ]
        );
    }

    #[test]
    fn environment_overrides_defaults() {
        let secrets = manager(&[
            ("MYSQLHOST", "db.internal"),
            ("MYSQLPORT", "3307"),
            ("PORT", "8080"),
            ("RUN_MIGRATIONS", "false"),
            ("CORS_ORIGINS", " https://a.example , ,https://b.example"),
        ]);
        assert_eq!(secrets.get("MYSQLHOST"), "db.internal");
        assert_eq!(secrets.mysql_port(), 3307);
        assert_eq!(secrets.port(), 8080);
        assert!(!secrets.run_migrations());
        assert_eq!(
            secrets.cors_origins(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn unparseable_numbers_fall_back() {
        let secrets = manager(&[("PORT", "eighty"), ("DB_MAX_CONNECTIONS", "-3")]);
        assert_eq!(secrets.port(), 5000);
        assert_eq!(secrets.max_connections(), 10);
    }

    #[test]
    fn prod_requires_a_password() {
        assert!(manager(&[("MODE", "PROD")]).validate().is_err());
        assert!(manager(&[("MODE", "prod"), ("MYSQLPASSWORD", "s3cret")]).validate().is_ok());
        assert!(manager(&[]).validate().is_ok());
    }
}
