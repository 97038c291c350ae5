//! Stdin-to-stdout driver for the rill interpreter.

use std::io::{self, Read, Write};

fn main() {
    rillc::init_tracing();

    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        // The language has no user-facing error channel; whatever was
        // read before the failure still runs, and the exit stays 0.
        tracing::error!(%err, "failed to read stdin");
    }

    let outputs = rillc::interpret(&source);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for value in outputs {
        let _ = writeln!(out, "{value}");
    }
    let _ = out.flush();
}
