//! Clickable move buttons and pointer hit-testing.

use emath::{pos2, vec2, Pos2, Rect, Vec2};

use crate::Move;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input understood by the [`InputSurface`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Moved(Pos2),
    Pressed(PointerButton),
}

/// Size and placement of the button row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub button_size: Vec2,
    pub spacing: f32,
    /// Distance from the top of the buttons to the bottom of the window.
    pub bottom_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_size: vec2(140., 60.),
            spacing: 40.,
            bottom_offset: 100.,
        }
    }
}

impl LayoutConfig {
    pub fn row_width(&self) -> f32 {
        let count = Move::ALL.len() as f32;
        self.button_size.x * count + self.spacing * (count - 1.)
    }

    /// Left edge of the row when it is centred in a window `window_width` wide.
    pub fn row_start(&self, window_width: f32) -> f32 {
        (window_width - self.row_width()) / 2.
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: Move,
    pub hovered: bool,
}

impl Button {
    /// Edges count as inside.
    pub fn contains(&self, point: Pos2) -> bool {
        self.rect.contains(point)
    }
}

/// The three move buttons, laid out in a centred row near the bottom of the window.
#[derive(Clone, Debug)]
pub struct InputSurface {
    config: LayoutConfig,
    buttons: [Button; 3],
}

impl InputSurface {
    pub fn new(config: LayoutConfig, window: Vec2) -> Self {
        let buttons = Move::ALL.map(|label| Button {
            rect: Rect::NOTHING,
            label,
            hovered: false,
        });
        let mut surface = Self { config, buttons };
        surface.recompute_layout(window);
        surface
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Reposition every button for a window of size `window`. Hover state is left alone.
    pub fn recompute_layout(&mut self, window: Vec2) {
        let LayoutConfig {
            button_size,
            spacing,
            bottom_offset,
        } = self.config;
        let start_x = self.config.row_start(window.x);
        let y = window.y - bottom_offset;

        for (i, button) in self.buttons.iter_mut().enumerate() {
            let x = start_x + i as f32 * (button_size.x + spacing);
            button.rect = Rect::from_min_size(pos2(x, y), button_size);
        }
        tracing::debug!(
            "Laid out buttons for {}x{} starting at x={start_x}",
            window.x,
            window.y
        );
    }

    /// Update hover state or report a click.
    ///
    /// A primary press over a hovered button calls `on_choose` with that button's move.
    pub fn handle(&mut self, event: PointerEvent, mut on_choose: impl FnMut(Move)) {
        match event {
            PointerEvent::Moved(pos) => {
                for button in &mut self.buttons {
                    button.hovered = button.contains(pos);
                }
            }
            PointerEvent::Pressed(PointerButton::Primary) => {
                for button in self.buttons.iter().filter(|b| b.hovered) {
                    on_choose(button.label);
                }
            }
            PointerEvent::Pressed(_) => {}
        }
    }
}
