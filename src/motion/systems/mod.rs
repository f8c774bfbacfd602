//! Motion domain: system modules wiring controllers into the Bevy schedule.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::AvianWorld;
pub(crate) use input::read_input;
pub(crate) use movement::{step_controllers, sync_transforms};
