//! Paints one frame of the game. Reads the event loop, never changes it.

use eframe::egui::{Align2, FontId, Painter};
use rps2d_lib::{
    event_loop::EventLoop,
    input::Button,
    layout::{
        BUTTON_LABEL_SIZE, BUTTON_ROUNDING, INSTRUCTION_SIZE, OUTCOME_SIZE, SCORE_SIZE, TITLE_SIZE,
    },
    palette,
};

use super::card::ChoiceCard;

pub fn paint<S>(painter: &Painter, event_loop: &EventLoop<S>) {
    let game = event_loop.game();
    let scene = event_loop.scene();

    painter.rect_filled(painter.clip_rect(), 0., palette::BACKGROUND);

    painter.text(
        scene.title,
        Align2::CENTER_CENTER,
        "Rock Paper Scissors",
        FontId::proportional(TITLE_SIZE),
        palette::TEXT,
    );
    painter.text(
        scene.instruction,
        Align2::CENTER_CENTER,
        "Choose your move:",
        FontId::proportional(INSTRUCTION_SIZE),
        palette::MUTED_TEXT,
    );

    if let Some(choice) = game.last_player_move() {
        ChoiceCard::new(choice, "You", scene.player_card).paint(painter);
    }
    if let Some(choice) = game.last_opponent_move() {
        ChoiceCard::new(choice, "Computer", scene.opponent_card).paint(painter);
    }

    for button in event_loop.surface().buttons() {
        paint_button(painter, button);
    }

    if let Some(outcome) = game.last_outcome() {
        painter.text(
            scene.outcome,
            Align2::CENTER_CENTER,
            outcome.message(),
            FontId::proportional(OUTCOME_SIZE),
            outcome.color(),
        );
    }

    painter.text(
        scene.score,
        Align2::LEFT_TOP,
        game.score(),
        FontId::proportional(SCORE_SIZE),
        palette::MUTED_TEXT,
    );
}

fn paint_button(painter: &Painter, button: &Button) {
    painter.rect_filled(
        button.rect,
        BUTTON_ROUNDING,
        palette::button_fill(button.hovered),
    );
    painter.text(
        button.rect.center(),
        Align2::CENTER_CENTER,
        button.label,
        FontId::proportional(BUTTON_LABEL_SIZE),
        palette::TEXT,
    );
}
