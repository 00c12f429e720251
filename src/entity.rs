use crate::grid::{self, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell-aligned board center; where the snake starts and resets to.
    pub fn board_center() -> Self {
        Self::new((GRID_WIDTH / 2) * CELL_SIZE, (GRID_HEIGHT / 2) * CELL_SIZE)
    }

    /// Position one cell over in `direction`, wrapping around board
    /// edges (the board is a torus, there are no walls).
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(
            grid::wrap(self.x + dx * CELL_SIZE, BOARD_WIDTH),
            grid::wrap(self.y + dy * CELL_SIZE, BOARD_HEIGHT),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector, scaled by `CELL_SIZE` when applied to a position.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of advancing the snake by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The head re-entered the body; the snake has already been reset.
    Collided,
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Occupied cells, head at index 0. Never empty.
    pub positions: Vec<Position>,
    /// Committed heading; never flips 180 degrees in one step.
    pub direction: Direction,
    /// At most one direction change requested since the last tick.
    pub pending_direction: Option<Direction>,
    /// Target body length; the body catches up as the snake moves.
    pub length: usize,
    /// Cell vacated by the most recent move, if any. Only the renderer's
    /// erase step cares about this.
    pub last_tail: Option<Position>,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            positions: vec![Position::board_center()],
            direction: Direction::Right,
            pending_direction: None,
            length: 1,
            last_tail: None,
        }
    }

    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Buffers a direction change for the next tick. Requests for the
    /// exact opposite of the committed heading are dropped here as well
    /// as in `update_direction`.
    pub fn queue_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    /// Commits a direction change: the explicit `requested` direction if
    /// given, otherwise whatever was buffered. A 180-degree reversal is
    /// ignored. The buffer is consumed either way.
    pub fn update_direction(&mut self, requested: Option<Direction>) {
        if let Some(candidate) = requested.or(self.pending_direction) {
            if candidate != self.direction.opposite() {
                self.direction = candidate;
            }
        }
        self.pending_direction = None;
    }

    /// Advances one cell in the committed direction. On self-collision
    /// the snake resets to its starting state and `Collided` is
    /// returned; otherwise the body slides (or grows toward `length`)
    /// and the vacated cell, if any, lands in `last_tail`.
    pub fn advance(&mut self) -> MoveOutcome {
        let new_head = self.head().stepped(self.direction);

        // The tail cell moves out of the way this tick unless the snake
        // is still growing, so it is excluded from the collision check.
        let will_vacate_tail = self.positions.len() >= self.length;
        let body = if will_vacate_tail {
            &self.positions[..self.positions.len() - 1]
        } else {
            &self.positions[..]
        };
        if body.contains(&new_head) {
            self.reset();
            return MoveOutcome::Collided;
        }

        self.positions.insert(0, new_head);
        if self.positions.len() > self.length {
            self.last_tail = self.positions.pop();
        } else {
            self.last_tail = None;
        }
        MoveOutcome::Moved
    }

    /// Raises the target length by one; the body extends on later ticks.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Returns to the creation state: one segment at the board center,
    /// heading right. Idempotent.
    pub fn reset(&mut self) {
        self.length = 1;
        self.positions.clear();
        self.positions.push(Position::board_center());
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.last_tail = None;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Places a fresh apple on some cell not in `occupied`.
    pub fn new(occupied: &[Position]) -> Self {
        let mut apple = Self {
            position: Position::new(0, 0),
        };
        apple.randomize_position(occupied);
        apple
    }

    /// Moves the apple to a uniformly random cell outside `occupied`.
    /// Rejection sampling; terminates as long as the snake does not
    /// cover the whole board, which it never comes close to doing.
    pub fn randomize_position(&mut self, occupied: &[Position]) {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = Position::new(
                rng.gen_range(0..GRID_WIDTH) * CELL_SIZE,
                rng.gen_range(0..GRID_HEIGHT) * CELL_SIZE,
            );
            if !occupied.contains(&candidate) {
                self.position = candidate;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_wraps_right_edge() {
        let pos = Position::new(BOARD_WIDTH - CELL_SIZE, CELL_SIZE * 5);
        let next = pos.stepped(Direction::Right);
        assert_eq!(next, Position::new(0, CELL_SIZE * 5));
    }

    #[test]
    fn stepped_wraps_top_edge() {
        let pos = Position::new(CELL_SIZE * 3, 0);
        let next = pos.stepped(Direction::Up);
        assert_eq!(next, Position::new(CELL_SIZE * 3, BOARD_HEIGHT - CELL_SIZE));
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn update_direction_rejects_reversal() {
        let mut snake = Snake::new();
        assert_eq!(snake.direction, Direction::Right);

        snake.update_direction(Some(Direction::Left));
        assert_eq!(snake.direction, Direction::Right);

        snake.update_direction(Some(Direction::Up));
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn queued_direction_applies_once() {
        let mut snake = Snake::new();
        snake.queue_direction(Direction::Down);
        snake.update_direction(None);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.pending_direction, None);

        // Nothing buffered now; heading stays put.
        snake.update_direction(None);
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn queue_rejects_reversal_at_input_time() {
        let mut snake = Snake::new();
        snake.queue_direction(Direction::Left);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn advance_records_vacated_tail() {
        let mut snake = Snake::new();
        let start = snake.head();

        assert_eq!(snake.advance(), MoveOutcome::Moved);
        assert_eq!(snake.last_tail, Some(start));
        assert_eq!(snake.positions.len(), 1);
    }

    #[test]
    fn advance_grows_toward_target_length() {
        let mut snake = Snake::new();
        snake.grow();

        assert_eq!(snake.advance(), MoveOutcome::Moved);
        assert_eq!(snake.positions.len(), 2);
        // No cell was vacated; the snake grew instead of sliding.
        assert_eq!(snake.last_tail, None);
    }

    #[test]
    fn head_reentering_body_resets() {
        let mut snake = Snake::new();
        // Build a 5-long snake heading right, then turn it back into
        // itself: Down, Left, Up runs the head into the second segment.
        for _ in 0..4 {
            snake.grow();
            snake.advance();
        }
        assert_eq!(snake.positions.len(), 5);

        snake.update_direction(Some(Direction::Down));
        snake.advance();
        snake.update_direction(Some(Direction::Left));
        snake.advance();
        snake.update_direction(Some(Direction::Up));
        assert_eq!(snake.advance(), MoveOutcome::Collided);

        assert_eq!(snake.length, 1);
        assert_eq!(snake.positions, vec![Position::board_center()]);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn tail_cell_being_vacated_is_not_a_collision() {
        // A length-4 snake circling a 2x2 block steps into the cell its
        // tail is leaving on the same tick. That is legal.
        let mut snake = Snake::new();
        for _ in 0..3 {
            snake.grow();
            snake.advance();
        }
        assert_eq!(snake.positions.len(), 4);

        snake.update_direction(Some(Direction::Down));
        snake.advance();
        snake.update_direction(Some(Direction::Left));
        snake.advance();
        snake.update_direction(Some(Direction::Up));
        snake.advance();
        snake.update_direction(Some(Direction::Right));
        assert_eq!(snake.advance(), MoveOutcome::Moved);
        assert_eq!(snake.positions.len(), 4);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut snake = Snake::new();
        snake.grow();
        snake.advance();
        snake.reset();
        let first = snake.clone();
        snake.reset();
        assert_eq!(snake.positions, first.positions);
        assert_eq!(snake.direction, first.direction);
        assert_eq!(snake.length, first.length);
    }

    #[test]
    fn apple_avoids_occupied_cells() {
        // Occupy everything except one cell; the apple must land there.
        let free = Position::new(CELL_SIZE * 7, CELL_SIZE * 7);
        let mut occupied = Vec::new();
        for cx in 0..GRID_WIDTH {
            for cy in 0..GRID_HEIGHT {
                let pos = Position::new(cx * CELL_SIZE, cy * CELL_SIZE);
                if pos != free {
                    occupied.push(pos);
                }
            }
        }

        let apple = Apple::new(&occupied);
        assert_eq!(apple.position, free);
    }
}
