use std::sync::Mutex;

use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter, Registry};

lazy_static! {
    static ref LOG_INITIALIZED: Mutex<bool> = Mutex::new(false);
}

/// Initialize logging.  If the environment variable `RUST_LOG` is set to a
/// non-empty value, it is interpreted as an `EnvFilter` and compact logs go to
/// stderr; otherwise nothing is installed and the `tracing` macros are no-ops.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_logging() {
    let mut initialized = match LOG_INITIALIZED.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if *initialized {
        return;
    }
    *initialized = true;

    // Scripts tend to set RUST_LOG unconditionally but potentially with an
    // empty value, and we don't want that to be interpreted as a desire to
    // enable logging.
    let rustlog = match std::env::var("RUST_LOG") {
        Ok(rustlog) if !rustlog.is_empty() => rustlog,
        _ => return,
    };

    let env_filter = match EnvFilter::try_new(&rustlog) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("Ignoring unparseable RUST_LOG [{}]: {}", rustlog, err);
            return;
        }
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .compact()
        // Output goes to logs and terminals alike, and ANSI only helps the
        // latter.
        .with_ansi(false)
        .without_time()
        .with_filter(env_filter);

    // Someone else (a test harness, say) may have beaten us to it.
    let _ = Registry::default().with(layer).try_init();
}
