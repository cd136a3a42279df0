//! Input system.
//!
//! [`update_input_state`] reads the keyboard from raylib once per frame and
//! writes the results into [`InputState`]. A fresh F11 press triggers
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll raylib for every bound key and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.states_mut() {
        let key = state.key_binding;
        state.update(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    }

    if input.toggle_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
