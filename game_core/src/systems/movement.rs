use crate::{Ball, Body};
use hecs::World;

/// Advance every ball by one tick of its own velocity
pub fn move_balls(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update();
    }
}
