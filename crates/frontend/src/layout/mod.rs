pub mod global_context;
pub mod shell;
