//! Domain model types for geographic tours.
//!
//! Provides the core value types: locations on the globe, routes as ordered
//! sequences of locations, and the outcome types solvers report back.

mod location;
mod outcome;
mod route;

pub use location::Location;
pub use outcome::{IterationRecord, SolveOutcome, Termination};
pub use route::Route;
