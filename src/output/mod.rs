//! Plan renderers.
//!
//! Every renderer is a pure function from planner output to a `String`;
//! the CLI decides where the bytes go. Identical inputs produce identical
//! text, so plans can be diffed across runs.

pub mod plan;
pub mod summary;

pub use plan::{render_agent_commands, render_plan, render_setup_commands};
pub use summary::render_summary;
