/// How a distance query spreads its work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Nested loops on the calling thread.
    #[default]
    Sequential,
    /// Outer loop split across the rayon thread pool, partial maxima
    /// combined afterwards.
    Parallel,
}
