mod execution;
pub mod query;

pub use execution::Execution;
