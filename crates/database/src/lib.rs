//! # Depot Database Crate
//!
//! This crate is the service's persistence layer: a PostgreSQL-backed store
//! for `Item` records with primary/read-replica routing.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** encapsulates all database-specific logic and provides a
//!   clean, abstract API to the rest of the application, hiding the
//!   underlying SQL and endpoint topology.
//! - **Explicit routing:** every operation is routed deterministically —
//!   mutations to the primary endpoint, reads to the replica when one is
//!   configured. The decision is made once, at construction, never per call.
//! - **Asynchronous & Pooled:** all operations are asynchronous; each
//!   endpoint is served by its own connection pool (`PgPool`) for
//!   high-performance, concurrent access.
//!
//! ## Public API
//!
//! - `StoreHandle`: a live link to one endpoint, with connect/close lifecycle
//!   and the raw statement primitives.
//! - `DataRouter`: owns the primary handle and the optional replica handle,
//!   and selects which one backs each operation.
//! - `ItemRepository`: the domain-level interface (validation, not-found
//!   semantics) used by the web server.
//! - `run_migrations`: applies the bundled schema migrations.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod router;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{run_migrations, StoreHandle};
pub use error::DbError;
pub use repository::{ItemRepository, DEFAULT_PAGE_SIZE};
pub use router::DataRouter;
