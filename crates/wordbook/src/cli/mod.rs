//! # CLI Behavior
//!
//! This is **one possible UI client** for wordbook. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`wordbook`)
//!
//! Running `wordbook` with no arguments lists saved words.
//!
//! ## Lookup vs Save
//!
//! - `wordbook lookup <word>` prints the entry and saves nothing.
//! - `wordbook lookup <word> --save` or `wordbook save <word>` also saves it.
//!   Saving a word that is already saved keeps the saved entry and says so.
//!
//! ## Editing
//!
//! `wordbook rename <old> <new>` changes the word of a saved entry in place.
//! Words are matched exactly, including case.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
