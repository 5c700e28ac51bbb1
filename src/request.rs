//! The status update sent to the monitoring server.
//!
//! The request body is a JSON object with four keys:
//!
//! ```json
//! {
//!     "host_name": "srv1",
//!     "service_description": "disk-check",
//!     "status_code": "0",
//!     "plugin_output": "Disk OK"
//! }
//! ```
//!
//! `status_code` is sent as a string, not as a JSON number.
use serde::Serialize;

use crate::status::ServiceStatus;

/// A passive check result for one service on one host.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct StatusUpdateRequest {
    /// Host object name.
    pub host: String,
    /// Service description.
    pub service: String,
    pub status: ServiceStatus,
    /// Plugin output.
    pub message: String,
}

impl StatusUpdateRequest {
    #[must_use]
    pub fn new(host: &str, service: &str, status: ServiceStatus, message: &str) -> Self {
        Self {
            host: host.to_owned(),
            service: service.to_owned(),
            status,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn payload(&self) -> Payload<'_> {
        Payload::from(self)
    }
}

/// Wire representation of a [`StatusUpdateRequest`].
#[derive(Serialize, PartialEq, Eq, Debug)]
pub struct Payload<'a> {
    pub host_name: &'a str,
    pub service_description: &'a str,
    pub status_code: String,
    pub plugin_output: &'a str,
}

impl<'a> From<&'a StatusUpdateRequest> for Payload<'a> {
    fn from(request: &'a StatusUpdateRequest) -> Self {
        Self {
            host_name: &request.host,
            service_description: &request.service,
            status_code: request.status.code().to_string(),
            plugin_output: &request.message,
        }
    }
}
