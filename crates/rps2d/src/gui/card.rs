use eframe::{
    egui::{Align2, FontId, Painter},
    epaint::Pos2,
};
use rps2d_lib::{layout::CardGeometry, palette, Move};

/// The panel showing which move one side picked last round.
pub struct ChoiceCard {
    pub choice: Move,
    pub title: &'static str,
    pub geometry: CardGeometry,
}

impl ChoiceCard {
    pub fn new(choice: Move, title: &'static str, center: Pos2) -> Self {
        Self {
            choice,
            title,
            geometry: CardGeometry::centered_at(center),
        }
    }

    pub fn paint(&self, painter: &Painter) {
        let Self {
            choice,
            title,
            geometry,
        } = self;

        painter.rect_filled(geometry.shadow, CardGeometry::ROUNDING, palette::CARD_SHADOW);
        painter.rect_filled(geometry.body, CardGeometry::ROUNDING, palette::CARD_BODY);

        painter.circle_filled(
            geometry.icon_center,
            CardGeometry::ICON_RADIUS,
            choice.color(),
        );
        painter.text(
            geometry.icon_center,
            Align2::CENTER_CENTER,
            choice.initial(),
            FontId::proportional(CardGeometry::ICON_TEXT_SIZE),
            palette::TEXT,
        );
        painter.text(
            geometry.title_center,
            Align2::CENTER_CENTER,
            title,
            FontId::proportional(CardGeometry::TITLE_SIZE),
            palette::TEXT,
        );
    }
}
