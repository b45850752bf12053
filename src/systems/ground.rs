use bevy::prelude::*;

use crate::components::{
    ContactPhase, GroundContact, GroundContactEvent, GroundSurface, JetEngine, SpatialComponent,
};

/// Applies collision notifications against tagged ground surfaces.
pub fn ground_contact_system(
    mut events: EventReader<GroundContactEvent>,
    surfaces: Query<(), With<GroundSurface>>,
    mut aircraft: Query<(&mut GroundContact, &SpatialComponent)>,
) {
    for event in events.read() {
        if surfaces.get(event.surface).is_err() {
            continue;
        }
        let Ok((mut contact, spatial)) = aircraft.get_mut(event.aircraft) else {
            continue;
        };

        match event.phase {
            ContactPhase::Started => {
                contact.touch_down(spatial.altitude());
                debug!("Touchdown at {:.2} m", spatial.altitude());
            }
            ContactPhase::Ended => contact.lift_off(),
        }
    }
}

/// Levels the nozzle once the aircraft has climbed clear of its touchdown
/// height. It only ever resets the rotation, it never tilts it.
pub fn nozzle_reset_system(mut query: Query<(&mut JetEngine, &GroundContact, &SpatialComponent)>) {
    for (mut engine, contact, spatial) in query.iter_mut() {
        let margin = engine.config.nozzle_reset_margin;
        if !contact.climbed_clear(spatial.altitude(), margin) {
            continue;
        }
        if let Some(nozzle) = engine.nozzle.as_mut() {
            nozzle.level();
        }
    }
}
