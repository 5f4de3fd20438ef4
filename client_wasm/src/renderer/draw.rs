use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use game_core::{Ball, GameRng, Paddle, Score, Screen};
use hecs::World;

use super::{Frame, Renderer, Sprite};

/// Balls first, then paddles on top, then the score labels
pub fn draw_frame(renderer: &Renderer, screen: &Screen, rng: &mut GameRng) -> Frame {
    let mut frame = Frame::new(
        screen.map.width.max(0) as u32,
        screen.map.height.max(0) as u32,
    );

    draw_sprites::<Ball>(&mut frame, &screen.world, rng);
    draw_sprites::<Paddle>(&mut frame, &screen.world, rng);
    draw_scores(renderer, &mut frame, &screen.score);

    frame
}

fn draw_sprites<T>(frame: &mut Frame, world: &World, rng: &mut GameRng)
where
    T: Sprite + hecs::Component,
{
    for (_e, sprite) in world.query::<&T>().iter() {
        let image = sprite.draw(rng);
        frame.blit(&image, sprite.origin());
    }
}

fn draw_scores(renderer: &Renderer, frame: &mut Frame, score: &Score) {
    let quarter = frame.width() as i32 / 4;
    let style = renderer.score_style();
    let labels = [
        (format!("LEFT: {}", score.left), quarter),
        (format!("RIGHT: {}", score.right), quarter * 3),
    ];

    for (label, x) in &labels {
        Text::new(label, Point::new(*x, renderer.score_baseline), style)
            .draw(frame)
            .unwrap_or_else(|never| match never {});
    }
}
