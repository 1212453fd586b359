//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod optimize;
mod srcset;
mod variant;

pub use completions::run_completions;
pub use optimize::run_optimize;
pub use srcset::run_srcset;
pub use variant::run_variant;
