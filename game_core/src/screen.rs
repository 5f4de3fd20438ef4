use glam::IVec2;
use hecs::World;

use crate::systems::{move_paddle, PaddleCommand};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameMap, GameRng, Paddle, Score,
    Side, Time,
};

/// Everything in one play session: playfield, entities and score
pub struct Screen {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub time: Time,
}

impl Screen {
    /// Build a session with both paddles and a full set of random balls
    pub fn new(width: i32, height: i32, config: Config, rng: &mut GameRng) -> Self {
        let mut screen = Self::empty(width, height, config);
        for _ in 0..screen.config.ball_count {
            let ball = Ball::spawn(&screen.map, &screen.config, rng);
            screen.spawn_ball(ball);
        }
        log::info!(
            "Screen {}x{} ready with {} balls",
            width,
            height,
            screen.config.ball_count
        );
        screen
    }

    /// Build a session with paddles only
    pub fn empty(width: i32, height: i32, config: Config) -> Self {
        let map = GameMap::new(width, height);
        let mut world = World::new();

        let size = IVec2::new(config.paddle_width, config.paddle_height);
        for side in [Side::Left, Side::Right] {
            let pos = IVec2::new(config.paddle_x(side, width), config.paddle_margin);
            create_paddle(&mut world, Paddle::new(side, pos, size));
        }

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            time: Time::new(),
        }
    }

    pub fn spawn_ball(&mut self, ball: Ball) -> hecs::Entity {
        create_ball(&mut self.world, ball)
    }

    /// Advance the whole session by one tick
    pub fn update(&mut self, rng: &mut GameRng) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            rng,
        );

        if self.events.any_score() {
            log::info!(
                "Tick {}: LEFT {} RIGHT {}",
                self.time.tick,
                self.score.left,
                self.score.right
            );
        }
    }

    /// Move a paddle immediately, outside the tick
    pub fn apply(&mut self, command: PaddleCommand) {
        move_paddle(&mut self.world, &self.map, command);
    }

    /// Snapshot of the balls in spawn order
    pub fn balls(&self) -> Vec<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .map(|(_e, ball)| *ball)
            .collect()
    }

    /// Snapshot of the paddles, left first
    pub fn paddles(&self) -> Vec<Paddle> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| self.paddle(side))
            .collect()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }
}
