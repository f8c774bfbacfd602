//! Fixed-timestep 2D platformer motion controller.
//!
//! [`motion`] holds the controller and its phase functions, independent of any
//! particular collision backend. [`content`] loads character tunables from RON,
//! [`core`] provides the camera and pause state, and `debug` (feature
//! `dev-tools`) draws probe gizmos.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod motion;
