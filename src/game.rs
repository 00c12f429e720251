use crate::entity::{Apple, Direction, MoveOutcome, Snake};

/// One snake, one apple, one board. There is no game-over state: a
/// self-collision silently resets the snake and play continues.
pub struct Game {
    pub snake: Snake,
    pub apple: Apple,
}

impl Game {
    pub fn new() -> Self {
        let snake = Snake::new();
        let apple = Apple::new(&snake.positions);
        Self { snake, apple }
    }

    /// Buffers a direction change from input; it takes effect on the
    /// next tick. Opposite-direction presses are rejected here already.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// One tick: resolve the buffered direction, advance the snake,
    /// then handle the apple.
    pub fn update(&mut self) {
        self.snake.update_direction(None);
        match self.snake.advance() {
            MoveOutcome::Collided => {
                // The reset body may land on the apple's cell; re-place
                // it so the apple is never hidden under the snake.
                if self.snake.positions.contains(&self.apple.position) {
                    self.apple.randomize_position(&self.snake.positions);
                }
            }
            MoveOutcome::Moved => {
                if self.snake.head() == self.apple.position {
                    self.snake.grow();
                    self.apple.randomize_position(&self.snake.positions);
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.snake.reset();
        self.apple.randomize_position(&self.snake.positions);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
