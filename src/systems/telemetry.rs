use bevy::prelude::*;

use crate::components::{AeroState, FlightTelemetry, GroundContact, JetEngine, SpatialComponent};

pub fn telemetry_system(
    mut query: Query<(
        &mut FlightTelemetry,
        &SpatialComponent,
        Option<&AeroState>,
        Option<&JetEngine>,
        Option<&GroundContact>,
    )>,
) {
    for (mut telemetry, spatial, aero, engine, contact) in query.iter_mut() {
        telemetry.speed = spatial.velocity.norm();
        telemetry.altitude = spatial.altitude();
        telemetry.vertical_speed = spatial.vertical_speed();
        telemetry.grounded = contact.is_some_and(|c| c.grounded);

        if let Some(aero) = aero {
            telemetry.airspeed = aero.airspeed;
            telemetry.alpha = aero.alpha;
            telemetry.c_l = aero.c_l;
            telemetry.c_d = aero.c_d;
            telemetry.lift_to_drag = aero.lift_to_drag;
            telemetry.lift = aero.lift;
            telemetry.drag = aero.drag;
            telemetry.dynamic_pressure = aero.dynamic_pressure;
        }

        if let Some(engine) = engine {
            telemetry.throttle = engine.state.throttle();
            telemetry.afterburner = engine.state.afterburner();
            telemetry.last_applied_thrust = engine.state.last_applied_thrust();
        }
    }
}
