//! Session management for interactive use of the filter engine.
//!
//! The engine itself is a set of pure functions; this module owns the
//! mutable state an interactive caller needs between those calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Embedders (Python bindings, tests, local tools)        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SessionStore (store.rs) - id allocation, shared map    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Session (session.rs) - dataset + selection + policy    │
//! │  - load with fingerprint deduplication                  │
//! │  - selection setters with cascade reconciliation        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Pure engine (crate::engine) - recomputed per read      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from `gantt.toml` via [`EngineConfig`]; sessions
//! created without one use the built-in defaults.

pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use config::EngineConfig;
pub use error::{SessionError, SessionResult};
pub use session::{LoadOutcome, Session};
pub use store::{global, SessionId, SessionStore};
