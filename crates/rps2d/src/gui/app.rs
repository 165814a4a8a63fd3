use eframe::{
    egui::{self, CentralPanel, Context, Event, Frame},
    App,
};
use rps2d_lib::{
    event_loop::{EventLoop, InputEvent, LoopState},
    input::{LayoutConfig, PointerButton, PointerEvent},
    random::RandomMoves,
    MoveSource, FRAME_RATE, INITIAL_WINDOW_SIZE,
};
use spin_sleep::LoopHelper;
use tracing::instrument;

use super::renderer;

pub struct RpsApp {
    event_loop: EventLoop<Box<dyn MoveSource>>,
    limiter: LoopHelper,
}

impl RpsApp {
    pub fn new() -> Self {
        Self::with_source(RandomMoves::new())
    }

    pub fn with_source(source: impl MoveSource + 'static) -> Self {
        let source: Box<dyn MoveSource> = Box::new(source);
        Self {
            event_loop: EventLoop::new(source, LayoutConfig::default(), INITIAL_WINDOW_SIZE),
            limiter: LoopHelper::builder()
                .report_interval_s(0.5)
                .build_with_target_rate(FRAME_RATE),
        }
    }

    /// Feed this frame's input to the event loop and paint the result.
    fn step(&mut self, ctx: &Context) -> LoopState {
        let mut events = Vec::new();

        let size = ctx.screen_rect().size();
        if size != self.event_loop.window() {
            events.push(InputEvent::Resized(size));
        }
        ctx.input(|i| events.extend(i.events.iter().filter_map(translate_event)));

        if self.event_loop.drain(events) == LoopState::Terminated {
            return LoopState::Terminated;
        }

        CentralPanel::default()
            .frame(Frame::none())
            .show(ctx, |ui| renderer::paint(ui.painter(), &self.event_loop));
        LoopState::Running
    }
}

impl App for RpsApp {
    #[instrument(skip_all)]
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.limiter.loop_start();
        if let Some(rate) = self.limiter.report_rate() {
            tracing::trace!("{rate:.1} frames/s");
        }

        if self.step(ctx) == LoopState::Terminated {
            frame.close();
            return;
        }

        // Keep the loop ticking even when egui has nothing new to show
        ctx.request_repaint();
        self.limiter.loop_sleep();
    }

    fn on_close_event(&mut self) -> bool {
        self.event_loop.dispatch(InputEvent::Quit);
        true
    }
}

fn translate_event(event: &Event) -> Option<InputEvent> {
    let pointer = match event {
        Event::PointerMoved(pos) => PointerEvent::Moved(*pos),
        Event::PointerButton {
            button,
            pressed: true,
            ..
        } => PointerEvent::Pressed(translate_button(*button)?),
        _ => return None,
    };
    Some(pointer.into())
}

fn translate_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}
