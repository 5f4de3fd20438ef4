use glam::IVec2;
use rand::Rng;

use crate::{Aabb, Config, GameMap, GameRng};

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Shared behaviour of everything that occupies a box on screen
pub trait Body {
    /// Advance one tick on its own
    fn update(&mut self);

    fn bounding_box(&self) -> Aabb;
}

/// Ball component - one of several bouncing balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub size: IVec2,
    pub dir: IVec2, // each axis is -1 or +1
    pub speed: i32,
}

impl Ball {
    pub fn new(pos: IVec2, size: IVec2, dir: IVec2, speed: i32) -> Self {
        Self {
            pos,
            size,
            dir,
            speed,
        }
    }

    /// Create a ball at a random spot in the middle of the arena
    pub fn spawn(map: &GameMap, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(IVec2::ZERO, IVec2::ZERO, IVec2::ONE, config.ball_speed);
        ball.reset(map, config, rng);
        ball
    }

    /// Re-randomize position inside the spawn bands and head inward.
    ///
    /// A ball placed past the midpoint on an axis moves toward lower
    /// coordinates on that axis, otherwise toward higher ones.
    pub fn reset(&mut self, map: &GameMap, config: &Config, rng: &mut GameRng) {
        let center = map.center();

        self.pos.x = rng.0.gen_range(map.spawn_x());
        self.dir.x = if self.pos.x > center.x { -1 } else { 1 };

        self.pos.y = rng.0.gen_range(map.spawn_y());
        self.dir.y = if self.pos.y > center.y { -1 } else { 1 };

        self.size = IVec2::splat(config.ball_size);

        log::debug!("Ball reset to {} heading {}", self.pos, self.dir);
    }

    pub fn bounce_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    pub fn bounce_y(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

impl Body for Ball {
    fn update(&mut self) {
        self.pos += self.dir * self.speed;
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Paddle component - moved only by player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub pos: IVec2,
    pub size: IVec2,
}

impl Paddle {
    pub fn new(side: Side, pos: IVec2, size: IVec2) -> Self {
        Self { side, pos, size }
    }

    /// Shift vertically by `delta`, staying inside `0..=max_height - height`
    pub fn move_by(&mut self, delta: i32, max_height: i32) {
        if self.pos.y + delta < 0 {
            self.pos.y = 0;
        } else if self.pos.y + self.size.y + delta > max_height {
            self.pos.y = max_height - self.size.y;
        } else {
            self.pos.y += delta;
        }
    }
}

impl Body for Paddle {
    fn update(&mut self) {}

    fn bounding_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
