use core_config::tracing::LogConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared `core_config` pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub log: LogConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=50051 unless set
        let log = LogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            log,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::tracing::LogLevel;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["HOST", "PORT", "LOG_LEVEL", "APP_ENV"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.server.address(), "0.0.0.0:50051");
            assert_eq!(config.log.level, LogLevel::Info);
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.app.name, "rainier_api");
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("PORT", Some("8081")),
                ("LOG_LEVEL", Some("debug")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.log.level, LogLevel::Debug);
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
