/// Tick counter for the fixed-rate simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64,       // Completed updates
    pub elapsed_ms: u64, // Simulated time
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, tick_ms: u64) {
        self.tick += 1;
        self.elapsed_ms += tick_ms;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: u32,
    pub right_scored: u32,
    pub paddle_hits: u32,
    pub wall_hits: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_score(&self) -> bool {
        self.left_scored > 0 || self.right_scored > 0
    }
}
