//! ECS resources.
//!
//! Submodules overview
//! - [`camera`] – orthographic follow camera with stepped zoom
//! - [`debugmode`] – marker enabling the debug overlay
//! - [`gameconfig`] – INI-backed configuration
//! - [`input`] – per-frame keyboard state
//! - [`rendertarget`] – fixed-resolution render texture (NonSend)
//! - [`screen`] – target, viewport and effective resolutions
//! - [`tilegrid`] – colored tile world
//! - [`windowsize`] – current window size in pixels
//! - [`worldtime`] – simulation time and the fixed-tick stepper

pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod rendertarget;
pub mod screen;
pub mod tilegrid;
pub mod windowsize;
pub mod worldtime;
