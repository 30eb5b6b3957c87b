//! Formatting helpers for rendering roots and solver output.

pub mod root;
pub mod solve;

pub use root::{format_complex, format_real, format_root, format_roots};
pub use solve::solution_summary;
