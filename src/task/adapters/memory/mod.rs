//! In-memory adapters for board synchronization tests.

mod remote;

pub use remote::{InMemoryTaskRemote, RemoteCall};
