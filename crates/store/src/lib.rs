//! # Basic Bettor Store
//!
//! The persistence boundary of the application.
//!
//! ## Architectural Principles
//!
//! - **Explicit Handle:** Callers hold an `Arc<dyn BettorRepository>` and pass it
//!   where it is needed. There is no process-wide connection singleton.
//! - **Atomic Updates:** A wager update is read, merged, revalued and written as one
//!   step, so a wager's fields and its profit never disagree.
//!
//! ## Public API
//!
//! - `BettorRepository`: The async trait every storage backend implements.
//! - `InMemoryRepository`: A process-local backend, used by the CLI and in tests.
//! - `StoreError`: The specific error types that can be returned from this crate.

pub mod error;
pub mod memory;
pub mod repository;

pub use error::StoreError;
pub use memory::InMemoryRepository;
pub use repository::BettorRepository;
