use crate::entity::Direction;
use crate::game::Game;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Direction(Direction),
    Quit,
}

/// Trait that abstracts the display/input collaborator.
/// The game core never touches the terminal directly.
pub trait Renderer {
    /// Acquire the display resource.
    fn init(&mut self) -> io::Result<()>;

    /// Render the current game state.
    fn render(&mut self, game: &Game) -> io::Result<()>;

    /// Release the display and restore terminal state.
    fn cleanup(&mut self) -> io::Result<()>;

    /// Drain all pending input events. Non-blocking apart from a short
    /// bounded wait that doubles as the loop's pacing sleep; returns an
    /// empty batch when nothing is queued.
    fn poll_input(&mut self) -> io::Result<Vec<Input>>;
}
