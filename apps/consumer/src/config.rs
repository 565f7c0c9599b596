//! Environment-driven service configuration

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Configuration validation failed: {message}")]
    ValidationFailed { message: String },
}

impl ConfigError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::invalid_value(
                "environment",
                s,
                "development, testing, or production",
            )),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env_str = match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        };
        write!(f, "{}", env_str)
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Consumer service configuration
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub service_name: String,
}

impl ConsumerConfig {
    /// Defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                environment,
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "debug".to_string(),
                service_name: env!("CARGO_PKG_NAME").to_string(),
            },
            Environment::Testing => Self {
                environment,
                host: "127.0.0.1".to_string(),
                port: 0, // Random port for tests
                log_level: "warn".to_string(),
                service_name: env!("CARGO_PKG_NAME").to_string(),
            },
            Environment::Production => Self {
                environment,
                host: "0.0.0.0".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                service_name: env!("CARGO_PKG_NAME").to_string(),
            },
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").or_else(|_| env::var("ENVIRONMENT")) {
            Ok(env_str) => env_str.parse()?,
            Err(_) => Environment::Development,
        };
        let mut config = Self::for_environment(environment);

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port_str) = env::var("PORT") {
            config.port = port_str.parse().map_err(|_| {
                ConfigError::invalid_value("port", &port_str, "valid port number (0-65535)")
            })?;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service_name = name;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation_failed("host must not be empty"));
        }
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::validation_failed("service name must not be empty"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}
