//! # Wordbook CLI
//!
//! The binary is intentionally thin: it only invokes `cli::run()` and handles
//! process termination. Everything from `wordbookapp::api` inward is UI agnostic;
//! the `cli` module owns argument parsing, logging setup, dispatch and rendering.
//!
//! ```text
//! cli/setup.rs     clap definitions, version string
//! cli/commands.rs  context wiring + one handler per subcommand
//! cli/render.rs    CmdResult → terminal text
//! ```

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
