//! CLI 命令实现

pub mod probe;
pub mod serve;

pub use probe::probe_command;
pub use serve::serve_command;
