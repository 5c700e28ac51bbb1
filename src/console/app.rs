//! Program to update the status of a service in a monitoring server.
//!
//! ```text
//! cargo run --bin update_status -- \
//!     --monhost monitor.example.com --username admin --password secret \
//!     --host srv1 --service disk-check --status OK --servicemsg "Disk OK"
//! ```
//!
//! The process prints one line and exits with the plugin exit code of the
//! outcome (0 OK, 2 CRITICAL, 3 UNKNOWN). Missing or invalid arguments are
//! reported by `clap` before anything is sent.
use std::ffi::OsString;

use clap::{ArgAction, Parser};
use tracing::info;

use crate::client::Transport;
use crate::config::{Configuration, DEFAULT_PATH, DEFAULT_PORT, DEFAULT_TIMEOUT};
use crate::console::printer::Printer;
use crate::logging::{self, Threshold};
use crate::outcome::{self, ExitCode};
use crate::request::StatusUpdateRequest;
use crate::status::ServiceStatus;

#[derive(Parser, Debug)]
#[command(
    name = "update_status",
    version,
    about = "A tool to update the status of a service in a monitoring server",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Specify monitor server
    #[arg(short = 'M', long = "monhost")]
    pub monitor_host: String,

    /// Specify monitor username
    #[arg(short, long)]
    pub username: String,

    /// Specify monitor password
    #[arg(short, long)]
    pub password: String,

    /// Name of host object in the monitor
    #[arg(short = 'H', long)]
    pub host: String,

    /// Description/name of service in the monitor
    #[arg(short = 'S', long)]
    pub service: String,

    /// Status of service in the monitor
    #[arg(short, long, value_enum)]
    pub status: ServiceStatus,

    /// Service status message
    #[arg(short = 'm', long = "servicemsg")]
    pub message: String,

    /// Disable SSL certificate verification
    #[arg(short, long)]
    pub insecure: bool,

    /// Path to command in API
    #[arg(short = 'P', long, default_value = DEFAULT_PATH)]
    pub path: String,

    /// HTTPS port for API access on the monitor host
    #[arg(short = 'r', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Diagnostic log level, written to the standard error
    #[arg(short, long, value_enum, default_value_t = Threshold::Off)]
    pub log_level: Threshold,

    /// Display script version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// # Errors
///
/// Will return an error if the arguments are missing or invalid, or if the
/// help or version output was requested. Nothing is sent in that case.
pub fn run<I, T>(args: I, transport: &impl Transport, printer: &impl Printer) -> Result<ExitCode, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;

    logging::setup(args.log_level);

    Ok(update(&args, transport, printer))
}

/// It sends the status update described by the arguments and prints the
/// resulting plugin line.
#[must_use]
pub fn update(args: &Args, transport: &impl Transport, printer: &impl Printer) -> ExitCode {
    let config = setup_config(args);
    let request = setup_request(args);

    info!(
        host = %request.host,
        service = %request.service,
        status = %request.status,
        "Updating service status on {} ...",
        config.monitor_host
    );

    let dispatch = transport.send(&config, &request);

    let report = outcome::report(&dispatch, &config, &request);

    printer.println(&report.message);

    report.exit_code
}

fn setup_config(args: &Args) -> Configuration {
    Configuration {
        monitor_host: args.monitor_host.clone(),
        port: args.port,
        path: args.path.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
        verify_tls: !args.insecure,
        timeout: DEFAULT_TIMEOUT,
    }
}

fn setup_request(args: &Args) -> StatusUpdateRequest {
    StatusUpdateRequest::new(&args.host, &args.service, args.status, &args.message)
}
