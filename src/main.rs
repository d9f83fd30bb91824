use clap::Parser;
use fnkit::cli::{execute_command, get_log_level, Cli};
use fnkit::error::{describe_error_code, FnkitError};
use fnkit::functions::printer;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(get_log_level(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("fnkit started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let mut out = printer();
    if let Err(e) = execute_command(cli.command, cli.config.as_deref(), &mut out) {
        if let Some(err) = e.downcast_ref::<FnkitError>() {
            error!(
                code = err.code(),
                "Fatal error: {:#} ({})",
                e,
                describe_error_code(err.code())
            );
        } else {
            error!("Fatal error: {:#}", e);
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
