//! Where each part of the scene goes for a given window size.

use emath::{pos2, vec2, Pos2, Rect, Vec2};

pub const TITLE_SIZE: f32 = 48.;
pub const INSTRUCTION_SIZE: f32 = 24.;
pub const OUTCOME_SIZE: f32 = 36.;
pub const SCORE_SIZE: f32 = 20.;
pub const BUTTON_LABEL_SIZE: f32 = 24.;
pub const BUTTON_ROUNDING: f32 = 12.;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub title: Pos2,
    pub instruction: Pos2,
    pub player_card: Pos2,
    pub opponent_card: Pos2,
    pub outcome: Pos2,
    /// Top-left corner of the score line.
    pub score: Pos2,
}

impl SceneLayout {
    pub fn new(window: Vec2) -> Self {
        let (w, h) = (window.x, window.y);
        Self {
            title: pos2(w / 2., 40.),
            instruction: pos2(w / 2., 120.),
            player_card: pos2(w / 4., h / 2.),
            opponent_card: pos2(w * 3. / 4., h / 2.),
            outcome: pos2(w / 2., h / 2. + 120.),
            score: pos2(20., 10.),
        }
    }
}

/// Geometry of a choice card centred on a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardGeometry {
    pub body: Rect,
    pub shadow: Rect,
    pub icon_center: Pos2,
    pub title_center: Pos2,
}

impl CardGeometry {
    pub const SIZE: Vec2 = vec2(140., 180.);
    pub const ROUNDING: f32 = 16.;
    pub const SHADOW_OFFSET: Vec2 = vec2(5., 5.);
    pub const ICON_RADIUS: f32 = 48.;
    pub const ICON_TEXT_SIZE: f32 = 48.;
    pub const TITLE_SIZE: f32 = 20.;

    pub fn centered_at(center: Pos2) -> Self {
        let body = Rect::from_center_size(center, Self::SIZE);
        Self {
            body,
            shadow: body.translate(Self::SHADOW_OFFSET),
            icon_center: pos2(body.center().x, body.top() + 70.),
            title_center: pos2(body.center().x, body.top() + 15.),
        }
    }
}
