//! # Wordbook Architecture
//!
//! Wordbook is a **UI-agnostic dictionary library**: it looks words up in a remote
//! dictionary service and keeps a durable, deduplicated collection of the entries a
//! user chose to save. The `wordbook` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade the UI talks to                              │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store/lookup outcomes into entries + messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Lookup (lookup.rs)           │ │  Storage (store/)         │
//! │  - DictionarySource boundary  │ │  - EntryStore invariants  │
//! │  - HttpSource via reqwest     │ │  - StorageBackend blobs   │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; presentation belongs to the client.
//!
//! ## Consistency Model
//!
//! [`store::EntryStore`] is the only writer of the persisted collection. Each
//! mutation rewrites the whole collection and only commits the in-memory copy once
//! the write succeeded. Two stores over the same medium do not coordinate: the last
//! writer wins and [`store::EntryStore::reload`] is how one observes the other.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`lookup`]: Remote dictionary lookups
//! - [`store`]: Storage abstraction and the saved-entry store
//! - [`model`]: Core data types (`Entry`, `Meaning`, `Definition`, `Phonetic`)
//! - [`config`]: Configuration loading
//! - [`init`]: Context wiring for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod lookup;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
