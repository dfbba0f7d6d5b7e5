//! Tasks domain state

use crate::repository::TaskRepository;

/// Application state for the Tasks domain
#[derive(Clone)]
pub struct TasksState {
    pub repo: TaskRepository,
}
