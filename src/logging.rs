use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "globalcoffee-core".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.trim().is_empty() {
            return Err("log_level must not be empty".to_string());
        }
        Ok(())
    }
}

pub fn init_logging(
    config: LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config.validate()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        "logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoggingConfig {
            service_name: "globalcoffee-core".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let config = LoggingConfig {
            service_name: "globalcoffee-core".to_string(),
            environment: "development".to_string(),
            log_level: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
