//! CLI command handlers. Each command is in its own file.

mod completions;
mod from_path;
mod parent;
mod resolve;

pub use completions::{run_completions, run_man};
pub use from_path::run_from_path;
pub use parent::run_parent;
pub use resolve::run_resolve;
