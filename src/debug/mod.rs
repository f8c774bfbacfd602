//! Debug overlay for tuning jump feel.
//!
//! Features:
//! - Probe boxes drawn per character, red when they hit
//! - Line from the body centre to the ceiling contact point
//! - Per-character phase readout in the log on demand

use bevy::prelude::*;

use crate::motion::{MotionController, PROBE_DISTANCE};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether probe gizmos are drawn
    pub show_probes: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_probes: true }
    }
}

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_probes, log_motion_state))
            .add_systems(
                Update,
                draw_probes.run_if(|state: Res<DebugState>| state.show_probes),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Toggle probe gizmos with F1 or backtick key
fn toggle_probes(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_probes = !debug_state.show_probes;
        info!(
            "[DEBUG] Probe gizmos {}",
            if debug_state.show_probes { "ON" } else { "OFF" }
        );
    }
}

/// Dump every controller's state with F2
fn log_motion_state(keyboard: Res<ButtonInput<KeyCode>>, query: Query<(Entity, &MotionController)>) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for (entity, controller) in &query {
        let state = controller.state();
        info!(
            "[DEBUG] {entity}: phase={:?} pos={:?} vel={:?} gravity={} airborne_for={:.3}s",
            state.phase(),
            state.position,
            state.velocity,
            state.applied_gravity,
            state.not_grounded_time
        );
    }
}

fn draw_probes(mut gizmos: Gizmos, query: Query<&MotionController>) {
    let idle = Color::srgb(0.3, 0.9, 0.4);
    let hit = Color::srgb(0.95, 0.25, 0.2);

    for controller in &query {
        let bounds = controller.bounds();
        let hits = controller.last_hits();
        let [down, up, left, right] = bounds.probe_boxes();

        for (probe, contact) in [
            (down, hits.ground),
            (up, hits.ceiling),
            (left, hits.left),
            (right, hits.right),
        ] {
            let color = if contact.is_some() { hit } else { idle };
            // Outline the full swept region, not just the starting box
            let sweep = probe.direction.as_vec2() * PROBE_DISTANCE;
            let size = probe.half_extent * 2.0 + sweep.abs();
            gizmos.rect_2d(
                Isometry2d::from_translation(probe.origin + sweep * 0.5),
                size,
                color,
            );
        }

        if let Some(ceiling) = hits.ceiling {
            gizmos.line_2d(bounds.center, ceiling.point, hit);
        }
    }
}
