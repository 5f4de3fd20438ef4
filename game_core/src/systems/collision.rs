use crate::{Aabb, Ball, Body, Config, Events, GameMap, Paddle, PaddleBounce};
use hecs::World;

/// Flip the vertical direction of balls touching the floor or ceiling
pub fn bounce_off_walls(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if map.touches_floor_or_ceiling(&ball.bounding_box()) {
            ball.bounce_y();
            events.wall_hits += 1;
        }
    }
}

/// Check every ball against every paddle
pub fn bounce_off_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle boxes first so balls can be borrowed mutably
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounding_box())
        .collect();

    let bounce: fn(&mut Ball, &Aabb) = match config.bounce {
        PaddleBounce::Repeat => reflect_off_paddle,
        PaddleBounce::Resolve => resolve_off_paddle,
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.bounding_box().touches(paddle) {
                bounce(ball, paddle);
                events.paddle_hits += 1;
            }
        }
    }
}

/// Negate the horizontal direction and leave the ball in place.
///
/// Nothing moves the ball out of the paddle, so a ball that is still inside
/// on the next tick is flipped again.
pub fn reflect_off_paddle(ball: &mut Ball, _paddle: &Aabb) {
    ball.bounce_x();
}

/// Place the ball just outside the paddle on the side its centre is on and
/// send it away from the paddle.
pub fn resolve_off_paddle(ball: &mut Ball, paddle: &Aabb) {
    let ball_center = ball.pos.x * 2 + ball.size.x;
    let paddle_center = paddle.min.x + paddle.max.x;

    if ball_center < paddle_center {
        // Touching counts on the near edge, so stop one pixel short
        ball.pos.x = paddle.min.x - ball.size.x - 1;
        ball.dir.x = -1;
    } else {
        ball.pos.x = paddle.max.x;
        ball.dir.x = 1;
    }
}
