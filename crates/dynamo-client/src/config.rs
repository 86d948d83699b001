use std::time::Duration;

pub use aws_sdk_dynamodb::config::Credentials;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overrides applied on top of the shared AWS configuration.
///
/// Anything left unset resolves through the SDK's default chains, so a
/// container role, web identity token or profile works without extra wiring.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Region the table lives in. Falls back to the default region chain.
    pub region: Option<String>,
    /// Endpoint override (local emulators, VPC endpoints).
    pub endpoint: Option<String>,
    /// Upper bound on one operation, including connect and read.
    pub timeout: Duration,
    /// Static credentials that replace the default credential chain.
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_resolution_to_the_sdk() {
        let config = ClientConfig::new();
        assert!(config.region.is_none());
        assert!(config.endpoint.is_none());
        assert!(config.credentials.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_sets_overrides() {
        let config = ClientConfig::new()
            .with_region("eu-west-1")
            .with_endpoint("http://localhost:8000")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let config = ClientConfig::new().with_credentials(Credentials::new(
            "AKIDEXAMPLE",
            "super-secret",
            None,
            None,
            "test",
        ));
        let rendered = format!("{config:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("super-secret"));
    }
}
