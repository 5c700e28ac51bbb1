//! Connection settings for the monitoring server API.
use std::fmt;
use std::time::Duration;

use url::Url;

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 443;

/// API path of the command that processes a passive service check result.
pub const DEFAULT_PATH: &str = "/api/command/PROCESS_SERVICE_CHECK_RESULT";

/// Hard limit for the whole request/response cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Validated configuration
#[derive(PartialEq, Eq, Clone)]
pub struct Configuration {
    /// Monitoring server host name or address.
    pub monitor_host: String,
    pub port: u16,
    pub path: String,
    pub username: String,
    pub password: String,
    /// `false` skips TLS certificate verification.
    pub verify_tls: bool,
    pub timeout: Duration,
}

impl Configuration {
    /// Settings with the default port, path, timeout and TLS verification enabled.
    #[must_use]
    pub fn new(monitor_host: &str, username: &str, password: &str) -> Self {
        Self {
            monitor_host: monitor_host.to_owned(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The command URL: `https://{monitor_host}:{port}{path}`.
    ///
    /// # Errors
    ///
    /// Will return an error if the host or the path do not form a valid URL.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("https://{}:{}{}", self.monitor_host, self.port, self.path))
    }
}

// Keep the password out of debug output.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("monitor_host", &self.monitor_host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("username", &self.username)
            .field("password", &"***")
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}
