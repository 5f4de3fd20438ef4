pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod screen;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use screen::*;
pub use systems::PaddleCommand;

use hecs::World;
use systems::*;

/// Run one fixed tick of the multi-ball simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move balls (paddles only move on input)
    move_balls(world);

    // 2. Check scoring (ball reached the left or right edge)
    check_scoring(world, map, score, events, rng, config);

    // 3. Bounce off floor and ceiling
    bounce_off_walls(world, map, events);

    // 4. Bounce off paddles
    bounce_off_paddles(world, config, events);

    time.advance(config.tick_ms);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
