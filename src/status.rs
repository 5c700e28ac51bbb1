//! Service status names and their monitoring plugin codes.
//!
//! Status     | Code
//! -----------|------
//! `OK`       | 0
//! `WARNING`  | 1
//! `CRITICAL` | 2
//! `UNKNOWN`  | 3
use std::fmt;

use clap::ValueEnum;

/// The status reported for a service object.
///
/// Names are matched exactly, so `ok` or `Warning` are rejected.
#[derive(ValueEnum, PartialEq, Eq, Debug, Hash, Clone, Copy)]
#[value(rename_all = "UPPER")]
pub enum ServiceStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceStatus {
    /// The numeric plugin code for the status.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ServiceStatus::Ok => 0,
            ServiceStatus::Warning => 1,
            ServiceStatus::Critical => 2,
            ServiceStatus::Unknown => 3,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ServiceStatus::Ok => "OK",
            ServiceStatus::Warning => "WARNING",
            ServiceStatus::Critical => "CRITICAL",
            ServiceStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
