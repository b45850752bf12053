use thiserror::Error;

/// Failures inside a single fixed step. None of these abort the step: the
/// owning system drops that model's force contribution for the tick.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Degenerate vector: {0}")]
    DegenerateVector(&'static str),

    #[error("Missing reference: {0}")]
    MissingReference(&'static str),
}
