//! Task collection management for the board engine.
//!
//! This module owns everything addressed by `(project, task)`: the domain
//! model (closed status set, validated identifiers, the task aggregate with
//! its activity timeline and notes), the remote authority contract, its HTTP
//! and in-memory adapters, and the repository client that validates input
//! before dispatching. The module follows hexagonal architecture:
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
