//! Board synchronization for a project's task collection.
//!
//! This module owns the derived per-status grouping, the authorization
//! policy for board mutations, the drag gesture boundary, and the
//! optimistic status transition engine with its rollback semantics. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
