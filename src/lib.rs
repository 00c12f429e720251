pub mod cli_renderer;
pub mod entity;
pub mod game;
pub mod grid;
pub mod renderer;

pub use cli_renderer::CliRenderer;
pub use entity::{Apple, Direction, MoveOutcome, Position, Snake};
pub use game::Game;
pub use renderer::{Input, Renderer};
