/// Game tuning parameters for multi-ball Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Balls
    pub const BALL_COUNT: usize = 8;
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED: i32 = 10; // pixels per tick

    // Paddles
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 400;
    pub const PADDLE_MARGIN: i32 = 10; // gap to the screen edge and top
    pub const PADDLE_STEP: i32 = 20; // pixels per key press

    // Loop
    pub const TICK_MS: u64 = 50;
}
