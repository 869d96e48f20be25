use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Data must be seeded (seed was 0).")]
    NotSeeded,
    #[error("Batch size must be > 0.")]
    EmptyBatch,
    #[error("Batch size {total} exceeds the generator ceiling of {ceiling}.")]
    CeilingExceeded { total: usize, ceiling: usize },
}
