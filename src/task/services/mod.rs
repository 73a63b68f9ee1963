//! Application services for the task repository client.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
