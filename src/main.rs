//! Terminal blockfall runner (default binary).
//!
//! Prints the rules to the normal screen, then runs the game loop on the
//! alternate screen with crossterm input and the framebuffer renderer.

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::GameConfig;

const HELP_TEXT: &str = "\
BLOCKFALL - a falling-block puzzle

  left/right (h/l, a/d)   slide the piece
  up (k, w)               spin the piece
  down (j, s)             drop one row
  enter, p                pause / resume
  esc, q                  quit

Each cleared row scores points; every scoring milestone speeds the
fall up and raises the level. Reach the goal score to win. The game
ends when the stack reaches the top of the well.
";

fn main() -> Result<()> {
    println!("{HELP_TEXT}");
    io::stdout().flush()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Some(summary)) = &result {
        println!("{summary}");
    }
    result.map(|_| ())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Run the game loop; returns a farewell line for the normal screen.
fn run(term: &mut TerminalRenderer) -> Result<Option<String>> {
    let mut game = Game::with_config(GameConfig::default(), seed_from_clock());
    let view = GameView::default();

    // Intro frame: the first piece only drops once a key is pressed.
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = view.render(&game, Viewport::new(w, h));
    term.present(&mut fb)?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if should_quit(key) {
                    return Ok(None);
                }
                break;
            }
        }
    }

    game.start();
    let mut last_drop = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&game, Viewport::new(w, h));
        term.present(&mut fb)?;

        if game.game_over() {
            break;
        }

        // While paused there is no gravity; block until the next key.
        if game.paused() {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(Some(farewell(&game)));
                    }
                    if let Some(ev) = handle_key_event(key) {
                        game.handle_event(ev);
                    }
                }
            }
            last_drop = Instant::now();
            continue;
        }

        // Input with timeout until the next gravity tick.
        let interval = Duration::from_millis(game.drop_interval_ms() as u64);
        let timeout = interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(Some(farewell(&game)));
                    }
                    if let Some(ev) = handle_key_event(key) {
                        game.handle_event(ev);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Gravity.
        if last_drop.elapsed() >= interval {
            last_drop = Instant::now();
            game.step();
        }
    }

    // Final frame is on screen; wait for any key before leaving.
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                break;
            }
        }
    }

    Ok(Some(farewell(&game)))
}

fn farewell(game: &Game) -> String {
    if game.won() {
        format!("You win! Final score: {}. Thanks for playing.", game.score())
    } else {
        format!("Game over. Final score: {}. Thanks for playing.", game.score())
    }
}
