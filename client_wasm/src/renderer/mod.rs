pub mod draw;
pub mod frame;
pub mod sprite;

use embedded_graphics::mono_font::ascii::FONT_7X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use game_core::{GameRng, Screen};

pub use frame::Frame;
pub use sprite::Sprite;

/// Baseline of the score labels, in pixels from the top
pub const SCORE_BASELINE: i32 = 40;

/// Software renderer producing one RGBA frame per tick
pub struct Renderer {
    pub score_font: &'static MonoFont<'static>,
    pub score_color: Rgb888,
    pub score_baseline: i32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            score_font: &FONT_7X13,
            score_color: Rgb888::BLACK,
            score_baseline: SCORE_BASELINE,
        }
    }

    pub fn score_style(&self) -> MonoTextStyle<'static, Rgb888> {
        MonoTextStyle::new(self.score_font, self.score_color)
    }

    /// Composite the whole screen into a freshly allocated frame
    pub fn draw(&self, screen: &Screen, rng: &mut GameRng) -> Frame {
        draw::draw_frame(self, screen, rng)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
