mod config;
mod errors;
mod search;

pub use config::SolverConfig;
pub use errors::SolverError;
pub use search::{Solver, shortest, verify_solution};
