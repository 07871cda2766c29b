//! Local search operators for improving tours.
//!
//! - [`two_opt()`]: First-improvement 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt, two_opt_swap, two_opt_with_cancel, TwoOptConfig, TwoOptResult};
