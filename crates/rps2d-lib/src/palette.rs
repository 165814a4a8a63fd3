use ecolor::Color32;

use crate::{Move, Outcome};

pub const BACKGROUND: Color32 = Color32::from_rgb(30, 30, 30);
pub const TEXT: Color32 = Color32::WHITE;
pub const MUTED_TEXT: Color32 = Color32::from_rgb(200, 200, 200);

pub const BUTTON_IDLE: Color32 = Color32::from_rgb(50, 50, 50);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(80, 80, 80);

pub const CARD_BODY: Color32 = Color32::from_rgb(70, 70, 70);
pub const CARD_SHADOW: Color32 = Color32::from_rgb(10, 10, 10);

pub fn button_fill(hovered: bool) -> Color32 {
    if hovered {
        BUTTON_HOVER
    } else {
        BUTTON_IDLE
    }
}

impl Move {
    /// Fill of the circle inside a choice card.
    pub fn color(self) -> Color32 {
        match self {
            Move::Rock => Color32::from_rgb(120, 120, 120),
            Move::Paper => Color32::from_rgb(200, 200, 240),
            Move::Scissors => Color32::from_rgb(200, 140, 140),
        }
    }
}

impl Outcome {
    pub fn color(self) -> Color32 {
        match self {
            Outcome::PlayerWin => Color32::from_rgb(72, 255, 0),
            Outcome::PlayerLose => Color32::from_rgb(255, 50, 50),
            Outcome::Draw => Color32::from_rgb(200, 200, 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{button_fill, BUTTON_HOVER, BUTTON_IDLE};
    use crate::{Move, Outcome};

    #[test]
    fn distinct_colors() {
        let outcomes = [Outcome::PlayerWin, Outcome::PlayerLose, Outcome::Draw];
        for (i, a) in outcomes.iter().enumerate() {
            for b in &outcomes[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
        for (i, a) in Move::ALL.iter().enumerate() {
            for b in &Move::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
        assert_eq!(button_fill(true), BUTTON_HOVER);
        assert_eq!(button_fill(false), BUTTON_IDLE);
    }
}
