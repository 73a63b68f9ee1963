//! Step definitions for board transition behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
