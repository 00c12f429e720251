use crate::entity::{Direction, Position};
use crate::game::Game;
use crate::grid::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::renderer::{Input, Renderer};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub struct CliRenderer {
    last_render: Instant,
    target_frame_time: Duration,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self {
            last_render: Instant::now(),
            // Target 30 FPS; the game ticks slower than this.
            target_frame_time: Duration::from_millis(33),
        }
    }

    fn cell_color(game: &Game, pos: Position) -> Color {
        if game.snake.positions.contains(&pos) {
            Color::Green
        } else if game.apple.position == pos {
            Color::Red
        } else {
            Color::Black
        }
    }

    fn draw_info(&self, game: &Game, stdout: &mut io::Stdout) -> io::Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, (GRID_HEIGHT + 1) as u16),
            ResetColor,
            Print(format!("Length: {}", game.snake.length))
        )?;
        queue!(
            stdout,
            cursor::MoveTo(0, (GRID_HEIGHT + 2) as u16),
            Print("Controls: Arrow Keys to move | Esc or Q to quit")
        )?;
        Ok(())
    }

    fn map_key(code: KeyCode) -> Option<Input> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
            KeyCode::Up => Some(Input::Direction(Direction::Up)),
            KeyCode::Down => Some(Input::Direction(Direction::Down)),
            KeyCode::Left => Some(Input::Direction(Direction::Left)),
            KeyCode::Right => Some(Input::Direction(Direction::Right)),
            _ => None,
        }
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CliRenderer {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        // Frame rate limiting: skip rendering if not enough time has passed
        if self.last_render.elapsed() < self.target_frame_time {
            return Ok(());
        }

        self.last_render = Instant::now();

        let mut stdout = io::stdout();

        queue!(stdout, cursor::MoveTo(0, 0))?;

        // Each board cell is two terminal columns wide.
        for cy in 0..GRID_HEIGHT {
            for cx in 0..GRID_WIDTH {
                let pos = Position::new(cx * CELL_SIZE, cy * CELL_SIZE);
                queue!(
                    stdout,
                    SetBackgroundColor(Self::cell_color(game, pos)),
                    Print("  ")
                )?;
            }
            queue!(stdout, ResetColor, Print("\r\n"))?;
        }

        self.draw_info(game, &mut stdout)?;

        stdout.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            ResetColor
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        // First poll carries a short timeout so the loop doesn't spin;
        // the rest of the queue is drained without waiting.
        let mut wait = Duration::from_millis(10);
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                if let Some(input) = Self::map_key(code) {
                    inputs.push(input);
                }
            }
        }
        Ok(inputs)
    }
}

impl Drop for CliRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
