use emath::{vec2, Vec2};

pub mod event_loop;
pub mod game_state;
pub mod input;
pub mod layout;
pub mod moves;
pub mod palette;
pub mod random;

pub use game_state::{GameState, Round, Scoreboard};
pub use moves::{Move, Outcome};
pub use random::MoveSource;

pub const WINDOW_TITLE: &str = "Rock Paper Scissors 2D";
pub const INITIAL_WINDOW_SIZE: Vec2 = vec2(640., 480.);
pub const FRAME_RATE: u32 = 60;
