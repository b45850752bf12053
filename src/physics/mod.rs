pub mod error;
pub mod traits;

pub use error::PhysicsError;
pub use traits::{EngineCommand, EngineInput, ForceCategory, ForceMode, ForceSink, RigidBody};
