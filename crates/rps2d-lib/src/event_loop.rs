//! Per-frame event dispatch.
//!
//! The front end translates whatever its windowing layer reports into [`InputEvent`]s and feeds a
//! frame's worth of them to [`EventLoop::drain`]. Everything the renderer needs is then readable
//! from the loop without further mutation.

use emath::{Pos2, Vec2};

use crate::{
    input::{InputSurface, LayoutConfig, PointerButton, PointerEvent},
    layout::SceneLayout,
    random::MoveSource,
    GameState,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved(Pos2),
    PointerPressed(PointerButton),
    Resized(Vec2),
    Quit,
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        match event {
            PointerEvent::Moved(pos) => Self::PointerMoved(pos),
            PointerEvent::Pressed(button) => Self::PointerPressed(button),
        }
    }
}

#[derive(Debug)]
pub struct EventLoop<S> {
    game: GameState<S>,
    surface: InputSurface,
    window: Vec2,
    state: LoopState,
}

impl<S: MoveSource> EventLoop<S> {
    pub fn new(source: S, config: LayoutConfig, window: Vec2) -> Self {
        Self {
            game: GameState::new(source),
            surface: InputSurface::new(config, window),
            window,
            state: LoopState::Running,
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        match event {
            InputEvent::Quit => {
                tracing::info!(
                    "Quit requested after {} rounds",
                    self.game.score().rounds()
                );
                self.state = LoopState::Terminated;
            }
            InputEvent::Resized(window) => {
                self.window = window;
                self.surface.recompute_layout(window);
            }
            InputEvent::PointerMoved(pos) => {
                self.surface.handle(PointerEvent::Moved(pos), |_| {});
            }
            InputEvent::PointerPressed(button) => {
                let game = &mut self.game;
                self.surface.handle(PointerEvent::Pressed(button), |m| {
                    game.choose_move(m);
                });
            }
        }
        self.state
    }

    /// Dispatch a frame's queue in order, stopping at the first quit.
    pub fn drain(&mut self, events: impl IntoIterator<Item = InputEvent>) -> LoopState {
        for event in events {
            if self.dispatch(event) == LoopState::Terminated {
                break;
            }
        }
        self.state
    }
}

impl<S> EventLoop<S> {
    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }

    pub fn window(&self) -> Vec2 {
        self.window
    }

    pub fn scene(&self) -> SceneLayout {
        SceneLayout::new(self.window)
    }
}
