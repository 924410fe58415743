//! Output formatting for CLI results.

pub mod overview;
pub mod table;

pub use overview::format_overview_table;
pub use table::{format_failures, format_pools_table};
