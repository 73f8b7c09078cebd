use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn setup_tracing(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("keychord=debug,keychord_parser=trace,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(verbose);

	tracing_subscriber::registry().with(filter).with(layer).init();
}
