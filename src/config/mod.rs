use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
}

const DEFAULT_PORT: u16 = 8080;

impl AppConfig {
    /// Reads the single recognized option, `PORT`, falling back to 8080.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>()?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            bind_addr: format!("0.0.0.0:{port}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn defaults_to_port_8080_when_unset() {
        let _guard = env_lock().lock().expect("env lock should be acquired");
        env::remove_var("PORT");

        let config = AppConfig::from_env().expect("config should parse");

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn honors_port_override() {
        let _guard = env_lock().lock().expect("env lock should be acquired");
        env::set_var("PORT", "9999");

        let config = AppConfig::from_env().expect("config should parse");
        env::remove_var("PORT");

        assert_eq!(config.bind_addr, "0.0.0.0:9999");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _guard = env_lock().lock().expect("env lock should be acquired");
        env::set_var("PORT", "not-a-port");

        let result = AppConfig::from_env();
        env::remove_var("PORT");

        assert!(result.is_err());
    }
}
