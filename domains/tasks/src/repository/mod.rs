mod tasks;

pub use tasks::TaskRepository;
