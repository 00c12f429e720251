use serpent::{CliRenderer, Game, Input, Renderer};
use std::io;
use std::time::{Duration, Instant};

// Game logic update rate (controls gameplay speed)
const TICK_RATE: Duration = Duration::from_millis(50); // 20 ticks/sec

fn main() -> io::Result<()> {
    let mut game = Game::new();
    let mut renderer = CliRenderer::new();

    renderer.init()?;
    let result = run(&mut game, &mut renderer);
    renderer.cleanup()?;
    result
}

/// Drives the game until the player quits (Ok) or the renderer fails
/// (Err). Process exit happens in `main`, never in here.
fn run(game: &mut Game, renderer: &mut impl Renderer) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        for input in renderer.poll_input()? {
            match input {
                Input::Direction(direction) => game.set_direction(direction),
                Input::Quit => return Ok(()),
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            game.update();
            last_tick = Instant::now();
        }

        // The renderer caps its own frame rate internally.
        renderer.render(game)?;
    }
}
