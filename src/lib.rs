//! **Monitor Status Updater** submits a passive service check result to a
//! monitoring server HTTP API and reports the outcome the way a monitoring
//! plugin does: one line of text and an exit code.
//!
//! - [Status codes](#status-codes)
//! - [Request](#request)
//! - [Outcomes](#outcomes)
//!
//! # Status codes
//!
//! The status given on the command line is mapped to its plugin code by
//! [`ServiceStatus::code`](crate::status::ServiceStatus::code).
//!
//! # Request
//!
//! One `POST https://{monhost}:{port}{path}` is sent with basic
//! authentication, a JSON body (see [`request`]) and a 15 second timeout.
//! There are no retries.
//!
//! # Outcomes
//!
//! The result of the request is classified into a [`Dispatch`](crate::outcome::Dispatch)
//! and translated by [`report`](crate::outcome::report) into the final line
//! and [`ExitCode`](crate::outcome::ExitCode).
pub mod client;
pub mod config;
pub mod console;
pub mod logging;
pub mod outcome;
pub mod request;
pub mod status;
