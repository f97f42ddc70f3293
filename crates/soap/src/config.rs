use stockroom_db::config::ConfigError;

/// Path the service is mounted at; the WSDL lives at `{SERVICE_PATH}?wsdl`.
pub const SERVICE_PATH: &str = "/product_service";

/// SOAP server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SoapConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Target namespace of the service (default: `urn:stockroom:ProductService`).
    pub namespace: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for SoapConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            namespace: "urn:stockroom:ProductService".into(),
            request_timeout_secs: 30,
        }
    }
}

impl SoapConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// The bind variables are prefixed so the SOAP and REST servers can share
    /// one `.env` file.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `SOAP_HOST`            | `127.0.0.1`                      |
    /// | `SOAP_PORT`            | `8000`                           |
    /// | `SOAP_NAMESPACE`       | `urn:stockroom:ProductService`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("SOAP_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "SOAP_PORT", defaults.port)?;
        let namespace = lookup("SOAP_NAMESPACE").unwrap_or(defaults.namespace);
        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;

        Ok(Self {
            host,
            port,
            namespace,
            request_timeout_secs,
        })
    }

    /// Public address of the service endpoint, used in the WSDL.
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}{SERVICE_PATH}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<SoapConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SoapConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn rest_bind_variables_are_ignored() {
        let config = load(&[("HOST", "0.0.0.0"), ("PORT", "3000")]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn soap_bind_variables_are_used() {
        let config = load(&[("SOAP_HOST", "0.0.0.0"), ("SOAP_PORT", "8080")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.endpoint_url(), "http://0.0.0.0:8080/product_service");
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_matches!(
            load(&[("SOAP_PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "SOAP_PORT", .. })
        );
    }
}
