use std::time::Duration;

use game_core::{Config, GameRng, Screen};

use crate::input::command_for_key;
use crate::renderer::{Frame, Renderer};
use crate::surface::Surface;

/// A single local session: simulation, randomness and renderer
pub struct LocalGame {
    pub screen: Screen,
    pub rng: GameRng,
    pub renderer: Renderer,
}

impl LocalGame {
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let screen = Screen::new(width, height, Config::new(), &mut rng);
        Self {
            screen,
            rng,
            renderer: Renderer::new(),
        }
    }

    pub fn tick_period(&self) -> Duration {
        self.screen.config.tick_period()
    }

    /// Update, draw and present one frame
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.screen.update(&mut self.rng);
        let frame = self.draw();
        surface.present(frame.width(), frame.height(), frame.as_bytes());
    }

    pub fn draw(&mut self) -> Frame {
        self.renderer.draw(&self.screen, &mut self.rng)
    }

    /// Apply a keydown right away; returns whether the key was used
    pub fn handle_key(&mut self, key_code: u32) -> bool {
        log::debug!("keydown {}", key_code);
        match command_for_key(key_code, &self.screen.config) {
            Some(command) => {
                self.screen.apply(command);
                true
            }
            None => false,
        }
    }
}
