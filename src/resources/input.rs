//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reacts to and exposes them to systems via the
//! [`InputState`] resource. WASD and the arrow keys both move the player,
//! Q and E zoom the camera in and out, F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held down this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// An inactive state bound to `key`.
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Store this frame's readings for the bound key.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame keyboard state relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    // Arrow keys
    pub alt_up: BoolState,
    pub alt_down: BoolState,
    pub alt_left: BoolState,
    pub alt_right: BoolState,
    // Camera
    pub zoom_in: BoolState,
    pub zoom_out: BoolState,
    pub toggle_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound_to(KeyboardKey::KEY_W),
            down: BoolState::bound_to(KeyboardKey::KEY_S),
            left: BoolState::bound_to(KeyboardKey::KEY_A),
            right: BoolState::bound_to(KeyboardKey::KEY_D),
            alt_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            alt_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            alt_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            alt_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            zoom_in: BoolState::bound_to(KeyboardKey::KEY_Q),
            zoom_out: BoolState::bound_to(KeyboardKey::KEY_E),
            toggle_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Every key state, for systems that poll them all the same way.
    pub fn states_mut(&mut self) -> [&mut BoolState; 11] {
        [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.alt_up,
            &mut self.alt_down,
            &mut self.alt_left,
            &mut self.alt_right,
            &mut self.zoom_in,
            &mut self.zoom_out,
            &mut self.toggle_debug,
        ]
    }

    /// Movement direction from the held keys, each axis in -1..=1.
    ///
    /// WASD and arrows are merged: holding W and Up counts once.
    pub fn move_axis(&self) -> Vector2 {
        let axis = |negative: bool, positive: bool| (positive as i8 - negative as i8) as f32;
        Vector2 {
            x: axis(
                self.left.active || self.alt_left.active,
                self.right.active || self.alt_right.active,
            ),
            y: axis(
                self.up.active || self.alt_up.active,
                self.down.active || self.alt_down.active,
            ),
        }
    }
}
