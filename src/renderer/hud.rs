//! Score, timer, ammo and end-of-game messages

use glam::Vec2;

use super::commands::{DrawCommand, Surface, TextAlign, colors};
use crate::sim::{GameState, Outcome, Rect};

const FONT_SIZE: f32 = 25.0;
const TITLE_FONT_SIZE: f32 = 70.0;

fn text(surface: &mut dyn Surface, text: String, pos: Vec2, size: f32, align: TextAlign) {
    surface.draw(DrawCommand::Text {
        text,
        pos,
        size,
        align,
        color: colors::TEXT,
    });
}

/// Headline and subtitle for a finished run
pub fn outcome_messages(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Won => ("Most Wondrous!", "Well done explorer!"),
        Outcome::Lost => ("Blazes!", "Get my repair kit and try again!"),
    }
}

/// Draw the overlay. During play this is score, timer and ammo; once the
/// game is over the centred outcome messages are added.
pub fn draw(surface: &mut dyn Surface, state: &GameState) {
    text(
        surface,
        format!("Score: {}", state.score),
        Vec2::new(20.0, 40.0),
        FONT_SIZE,
        TextAlign::Left,
    );
    text(
        surface,
        format!("Timer: {:.1}", state.game_time * 0.001),
        Vec2::new(20.0, 100.0),
        FONT_SIZE,
        TextAlign::Left,
    );

    if let Some(outcome) = state.outcome() {
        let (headline, subtitle) = outcome_messages(outcome);
        let center = state.playfield() * 0.5;
        text(
            surface,
            headline.to_string(),
            center - Vec2::new(0.0, 20.0),
            TITLE_FONT_SIZE,
            TextAlign::Center,
        );
        text(
            surface,
            subtitle.to_string(),
            center + Vec2::new(0.0, 20.0),
            FONT_SIZE,
            TextAlign::Center,
        );
    }

    let color = if state.player.power_up {
        colors::AMMO_POWERED
    } else {
        colors::AMMO
    };
    for i in 0..state.ammo.bars() {
        surface.draw(DrawCommand::FillRect {
            rect: Rect::new(20.0 + 5.0 * i as f32, 50.0, 3.0, 20.0),
            color,
        });
    }
}
