pub mod actions;
pub mod projection;
pub mod task_ops;
