use crate::{Ball, Body, Config, Events, GameMap, GameRng, Score};
use hecs::World;

/// Check if a ball reached the left or right edge (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let aabb = ball.bounding_box();
        if map.exits_right(&aabb) {
            // Left player scores
            score.increment_left();
            events.left_scored += 1;
            ball.reset(map, config, rng);
        } else if map.exits_left(&aabb) {
            // Right player scores
            score.increment_right();
            events.right_scored += 1;
            ball.reset(map, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::IVec2;

    fn setup_world() -> (World, Config, GameMap, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new(800, 600);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, map, score, events, rng)
    }

    fn ball_at(x: i32, y: i32, dir_x: i32) -> Ball {
        Ball::new(IVec2::new(x, y), IVec2::splat(20), IVec2::new(dir_x, 1), 10)
    }

    #[test]
    fn test_left_player_scores_when_ball_reaches_right_edge() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, ball_at(780, 300, 1));

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(events.left_scored, 1);
    }

    #[test]
    fn test_right_player_scores_when_ball_reaches_left_edge() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, ball_at(0, 300, -1));

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.right_scored, 1);
    }

    #[test]
    fn test_ball_resets_into_spawn_band_after_scoring() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, ball_at(-5, 590, -1));

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(map.spawn_x().contains(&ball.pos.x));
        assert!(map.spawn_y().contains(&ball.pos.y));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, ball_at(400, 300, 1));

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.any_score(), "No scoring events");
        assert_eq!(world.get::<&Ball>(entity).unwrap().pos, IVec2::new(400, 300));
    }

    #[test]
    fn test_every_exiting_ball_counts_once() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, ball_at(790, 100, 1));
        create_ball(&mut world, ball_at(785, 200, 1));
        create_ball(&mut world, ball_at(-10, 300, -1));

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 1);
        assert_eq!(events.left_scored, 2);
        assert_eq!(events.right_scored, 1);
    }
}
