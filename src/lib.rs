//! tilecam library.
//!
//! A fixed-resolution 2D view over a tile world: the [`Screen`](resources::screen::Screen)
//! resource maps the target resolution onto any window size, and the
//! [`OrthographicCamera`](resources::camera::OrthographicCamera) follows a
//! target inside it. Components, resources, systems and events are exposed
//! for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
