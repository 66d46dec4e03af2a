//! # Grocery Goblin
//!
//! A shopping-list library with a command-line client. The list itself, the
//! share links and the voice command matching are all UI agnostic; `goblin`
//! (the binary) is one client among possible others.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes selectors (positions / text → ItemIds)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - List rules, import merging, voice commands               │
//! │  - Returns CmdResult: changes + messages, never prints      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore over a KeyValueStore                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing
//!
//! Most tests live next to the commands and run against `InMemoryStore`
//! (see `store::memory::fixtures`). The binary is exercised end to end from
//! `tests/` with `GOBLIN_HOME` pointed at a temp dir.
//!
//! ## Modules
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Item`, `ItemId`, `ListSummary`
//! - [`index`]: Positional and text selectors
//! - [`share`]: Share link and plain-text codec
//! - [`voice`]: Transcript interpretation and the listening session
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod share;
pub mod store;
pub mod voice;
