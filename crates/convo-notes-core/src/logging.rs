use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive prefix shared by the binary (`convo_notes`) and this crate
/// (`convo_notes_core`); `EnvFilter` matches targets by prefix.
const LOG_TARGET: &str = "convo_notes";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "build_index");
/// // Or with additional fields:
/// trace_time!(start, "build_index", entries = index.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => format!("{}=debug", LOG_TARGET),
        (false, None) => format!("{}=warn", LOG_TARGET),
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(&level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins, then CONVO_NOTES_LOG, then the CLI-derived level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CONVO_NOTES_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive_for(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Expand a bare level (`debug`) into a directive scoped to our crates.
/// Full directives (`convo_notes_core=trace`) pass through untouched.
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("{}={}", LOG_TARGET, level)
    }
}
