//! Motion domain: fixed-tick stepping and publishing of controller output.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::systems::AvianWorld;
use crate::motion::{JumpKind, MotionController, StepReport};

pub(crate) fn step_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &mut MotionController)>,
) {
    let dt = time.delta_secs();
    let world = AvianWorld::new(&spatial_query);

    for (entity, mut controller) in &mut query {
        let report = controller.step(&world, dt);
        log_transitions(entity, &controller, &report);
    }
}

fn log_transitions(entity: Entity, controller: &MotionController, report: &StepReport) {
    let state = controller.state();

    match report.jump {
        Some(JumpKind::Ground) => debug!("{entity}: ground jump, vy={}", state.velocity.y),
        Some(JumpKind::Coyote) => debug!(
            "{entity}: coyote jump after {:.3}s airborne",
            state.not_grounded_time
        ),
        None => {}
    }
    if report.released_early {
        debug!("{entity}: jump released early, fast-fall engaged");
    }
    if report.apex_entered {
        debug!(
            "{entity}: apex entered at {:?}, vx={}",
            state.position, state.velocity.x
        );
    }
    if report.apex_expired {
        debug!("{entity}: apex expired after {:.3}s", state.apex_time);
    }
    if report.landed {
        debug!("{entity}: landed at {:?}", state.position);
    } else if report.left_ground {
        debug!("{entity}: left ground, coyote window open");
    }
    if let Some(hit) = report.hits.ceiling {
        trace!(
            "{entity}: ceiling contact offset {:?}",
            hit.point - controller.bounds().center
        );
    }
}

/// Publish each controller's authoritative position to its transform.
pub(crate) fn sync_transforms(
    mut query: Query<(&MotionController, &mut Transform), Changed<MotionController>>,
) {
    for (controller, mut transform) in &mut query {
        let position = controller.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
