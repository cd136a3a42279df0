//! ECS systems.
//!
//! Submodules overview
//! - [`camera`] – zoom from input, then follow the camera target
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into velocity on entities
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw the world into the render target and present it
//! - [`screen`] – recompute the effective resolution on window resize
//! - [`time`] – advance simulation time by one fixed tick

pub mod camera;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod screen;
pub mod time;
