//! Keyboard input handling

use game_core::{Config, PaddleCommand, Side};

pub const KEY_UP: u32 = 38;
pub const KEY_DOWN: u32 = 40;
pub const KEY_W: u32 = 87;
pub const KEY_S: u32 = 83;

/// Map a keydown key code to a paddle step.
///
/// Arrows drive the right paddle, W/S the left one. Anything else is ignored.
pub fn command_for_key(key_code: u32, config: &Config) -> Option<PaddleCommand> {
    let step = config.paddle_step;
    match key_code {
        KEY_UP => Some(PaddleCommand::up(Side::Right, step)),
        KEY_DOWN => Some(PaddleCommand::down(Side::Right, step)),
        KEY_W => Some(PaddleCommand::up(Side::Left, step)),
        KEY_S => Some(PaddleCommand::down(Side::Left, step)),
        _ => None,
    }
}
