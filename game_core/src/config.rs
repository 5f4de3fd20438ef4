use std::time::Duration;

use crate::{Params, Side};

/// How a ball reacts while its box touches a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleBounce {
    /// Negate the horizontal direction on every tick of contact, leaving the
    /// ball where it is. A ball that stays inside a paddle keeps flipping.
    #[default]
    Repeat,
    /// Move the ball just outside the paddle and send it away, once.
    Resolve,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_count: usize,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub paddle_step: i32,
    pub tick_ms: u64,
    pub bounce: PaddleBounce,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_count: Params::BALL_COUNT,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            tick_ms: Params::TICK_MS,
            bounce: PaddleBounce::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle on the given side of an arena
    pub fn paddle_x(&self, side: Side, arena_width: i32) -> i32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Fixed interval between two ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left, 800), 10, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right, 800), 780, "Right paddle X position");
    }

    #[test]
    fn test_config_tick_period() {
        let config = Config::new();
        assert_eq!(config.tick_period(), Duration::from_millis(50));
    }

    #[test]
    fn test_default_bounce_repeats() {
        assert_eq!(Config::new().bounce, PaddleBounce::Repeat);
    }
}
