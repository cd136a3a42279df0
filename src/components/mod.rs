//! ECS components.
//!
//! Submodules overview
//! - [`boxshape`] – solid rectangle drawn at the entity's position
//! - [`cameratarget`] – marks the entity the camera follows
//! - [`inputcontrolled`] – keyboard-driven movement speed
//! - [`mapposition`] – world-space position
//! - [`rigidbody`] – velocity integrated by the movement system

pub mod boxshape;
pub mod cameratarget;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
