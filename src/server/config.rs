use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

pub struct Config {
    pub database_url: String,

    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or `SERVER_PORT`
    ///   is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = required("DATABASE_URL")?;

        let port = required("SERVER_PORT")?;
        let server_port = port.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
            name: "SERVER_PORT".to_string(),
            value: port.clone(),
        })?;

        let server_host =
            lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
