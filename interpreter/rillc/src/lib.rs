//! The rill command-line interpreter.
//!
//! Wires the pipeline together: split raw source into its layout, parse
//! the code lines, execute against the initialized environment, and hand
//! back the printed values.

#[cfg(test)]
mod tests;

use std::sync::Once;

use rill_eval::Environment;

/// Run `source` through the full pipeline, returning the printed values
/// in execution order.
///
/// Source with fewer than three non-blank lines has no statements and no
/// variables and produces nothing.
pub fn interpret(source: &str) -> Vec<i64> {
    let Some(layout) = rill_parse::split_source(source) else {
        return Vec::new();
    };
    let program = rill_parse::parse_program(&layout.code);
    let mut env = Environment::with_bindings(&layout.names, &layout.values);
    rill_eval::run(&program, &mut env);
    env.into_outputs()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Quiet unless `RUST_LOG` is set; safe to call more than once. Tracing
/// goes to stderr and never changes what lands on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
