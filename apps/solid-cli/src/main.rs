//! # Solid Cart Entry Point
//!
//! ```bash
//! # Replay the demo session (Apple × 3, then × 5)
//! cargo run -p solid-cli
//!
//! # Buy from the sample catalog
//! cargo run -p solid-cli -- Carrot:2 "Bell Pepper:0.5" Onion
//!
//! # Truncate at one decimal, quiet logs
//! SOLID_PRECISION=1 RUST_LOG=warn cargo run -p solid-cli -- Tomato:3
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match solid_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
