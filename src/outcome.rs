//! Translation of the request outcome into a monitoring plugin result.
//!
//! Every run ends with exactly one line on stdout and one of the plugin exit
//! codes:
//!
//! Outcome                          | Exit code
//! ---------------------------------|----------
//! HTTP `200`                       | `0` (OK)
//! HTTP `400`, `401` or `404`       | `2` (CRITICAL)
//! Timeout, TLS or connection error | `2` (CRITICAL)
//! Any other HTTP status            | `3` (UNKNOWN)
//! Any other transport error        | `3` (UNKNOWN)
use crate::config::Configuration;
use crate::request::StatusUpdateRequest;

/// What happened to the single request sent to the server.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Dispatch {
    /// A response was received with this HTTP status code.
    Success(u16),
    Timeout,
    /// The TLS handshake failed, usually on certificate verification.
    Tls,
    /// No connection could be established.
    Connection,
    /// Any other transport failure, with its error text.
    Other(String),
}

/// Monitoring plugin exit codes.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
pub enum ExitCode {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl ExitCode {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The final line printed and the exit code of the process.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Report {
    pub message: String,
    pub exit_code: ExitCode,
}

impl Report {
    fn new(exit_code: ExitCode, message: String) -> Self {
        Self { message, exit_code }
    }
}

/// It maps the dispatch result to the report for the given request.
///
/// The HTTP `400` message names the host and service the other way around
/// than the `200` one. Consumers may parse the literal text, so it is kept.
#[must_use]
pub fn report(dispatch: &Dispatch, config: &Configuration, request: &StatusUpdateRequest) -> Report {
    match dispatch {
        Dispatch::Timeout => Report::new(
            ExitCode::Critical,
            format!("CRITICAL - Connection to host \"{}\" timed out", config.monitor_host),
        ),
        Dispatch::Tls => Report::new(
            ExitCode::Critical,
            "CRITICAL - SSL certificate validation error - use \"--insecure\" to disabled verification".to_owned(),
        ),
        Dispatch::Connection => Report::new(
            ExitCode::Critical,
            format!(
                "CRITICAL - Failed to connect to host \"{}\" on port {}",
                config.monitor_host, config.port
            ),
        ),
        Dispatch::Other(error) => Report::new(ExitCode::Unknown, format!("UNKNOWN - Unexpected exception: \"{error}\"")),
        Dispatch::Success(200) => Report::new(
            ExitCode::Ok,
            format!(
                "OK - Service \"{}\" on host \"{}\" was updated successfully",
                request.service, request.host
            ),
        ),
        Dispatch::Success(400) => Report::new(
            ExitCode::Critical,
            format!(
                "CRITICAL - Host \"{}\" or service \"{}\" was not found. Please check your spelling and capitilization",
                request.service, request.host
            ),
        ),
        Dispatch::Success(401) => Report::new(
            ExitCode::Critical,
            "CRITICAL - Username, password and/or the users priviliges was not accepted by server".to_owned(),
        ),
        Dispatch::Success(404) => Report::new(
            ExitCode::Critical,
            format!("CRITICAL - The requested URL \"{}\" was not found", config.path),
        ),
        Dispatch::Success(code) => Report::new(ExitCode::Unknown, format!("UNKNOWN - Unexpected HTTP status code: \"{code}\"")),
    }
}
