use monitor_status_updater::client::HttpTransport;
use monitor_status_updater::console::app;
use monitor_status_updater::console::stdout::Console;

fn main() {
    match app::run(std::env::args_os(), &HttpTransport::new(), &Console::new()) {
        Ok(exit_code) => std::process::exit(exit_code.code()),
        Err(err) => err.exit(),
    }
}
