//! Per-entity sprite rasterization

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use game_core::{Ball, GameRng, Paddle};
use glam::IVec2;
use rand::Rng;

use super::frame::Frame;

/// Something that can paint itself into a standalone image
pub trait Sprite {
    /// Where the top-left corner of the image goes on screen
    fn origin(&self) -> IVec2;

    fn draw(&self, rng: &mut GameRng) -> Frame;
}

impl Sprite for Ball {
    fn origin(&self) -> IVec2 {
        self.pos
    }

    /// Filled circle with a one pixel outline, both in fresh random colors
    /// on every call.
    fn draw(&self, rng: &mut GameRng) -> Frame {
        let mut image = Frame::new(self.size.x.max(0) as u32, self.size.y.max(0) as u32);

        let stroke = random_color(rng);
        let fill = random_color(rng);
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(stroke)
            .stroke_width(1)
            .fill_color(fill)
            .build();

        let diameter = self.size.x.min(self.size.y).max(0) as u32;
        Circle::new(Point::zero(), diameter)
            .into_styled(style)
            .draw(&mut image)
            .unwrap_or_else(|never| match never {});
        image
    }
}

impl Sprite for Paddle {
    fn origin(&self) -> IVec2 {
        self.pos
    }

    /// Solid black rectangle
    fn draw(&self, _rng: &mut GameRng) -> Frame {
        let size = Size::new(self.size.x.max(0) as u32, self.size.y.max(0) as u32);
        let mut image = Frame::new(size.width, size.height);
        Rectangle::new(Point::zero(), size)
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
            .draw(&mut image)
            .unwrap_or_else(|never| match never {});
        image
    }
}

fn random_color(rng: &mut GameRng) -> Rgb888 {
    Rgb888::new(
        rng.0.gen_range(0..255),
        rng.0.gen_range(0..255),
        rng.0.gen_range(0..255),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    fn ball() -> Ball {
        Ball::new(IVec2::new(40, 60), IVec2::splat(20), IVec2::ONE, 10)
    }

    #[test]
    fn test_ball_sprite_is_an_opaque_disc() {
        let mut rng = GameRng::new(3);
        let image = ball().draw(&mut rng);

        assert_eq!((image.width(), image.height()), (20, 20));
        assert_eq!(image.pixel(10, 10).map(|p| p[3]), Some(255), "centre is filled");
        assert_eq!(image.pixel(0, 0), Some([0, 0, 0, 0]), "corner stays clear");
        assert_eq!(image.pixel(19, 19), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_ball_colors_change_between_draws() {
        let mut rng = GameRng::new(3);
        let first = ball().draw(&mut rng);
        let second = ball().draw(&mut rng);
        assert_ne!(first.pixel(10, 10), second.pixel(10, 10));
    }

    #[test]
    fn test_ball_origin_is_position() {
        assert_eq!(ball().origin(), IVec2::new(40, 60));
    }

    #[test]
    fn test_paddle_sprite_is_solid_black() {
        let paddle = Paddle::new(Side::Left, IVec2::new(10, 10), IVec2::new(10, 400));
        let image = paddle.draw(&mut GameRng::default());

        assert_eq!((image.width(), image.height()), (10, 400));
        assert!(image
            .as_bytes()
            .chunks_exact(4)
            .all(|p| p == [0, 0, 0, 255]));
        assert_eq!(paddle.origin(), IVec2::new(10, 10));
    }
}
