/// Configuration for the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Spread top-level digit choices and sweep targets over the rayon pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SolverConfig {
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}
