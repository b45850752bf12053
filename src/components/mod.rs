pub mod aerodynamics;
pub mod aircraft;
pub mod attachment;
pub mod controls;
pub mod ground;
pub mod physics;
pub mod propulsion;
pub mod spatial;
pub mod telemetry;

pub use aerodynamics::{AeroState, Wing, WingConfig};
pub use aircraft::{ConfigError, JetAircraftConfig, MassConfig};
pub use attachment::{Attachment, SurfaceFrame};
pub use controls::{EngineCommandEvent, EngineControls};
pub use ground::{ContactPhase, GroundContact, GroundContactEvent, GroundSurface};
pub use physics::{BodyView, Force, PhysicsComponent};
pub use propulsion::{JetEngine, JetEngineConfig, JetEngineState, StepRule, ThrustApplication};
pub use spatial::SpatialComponent;
pub use telemetry::FlightTelemetry;
