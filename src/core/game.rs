//! Game module - the round controller
//!
//! Drives one falling piece at a time through spawn, drift, landing, commit
//! and clear-check, and owns the game-over / win conditions. All collision
//! gating happens here, before any mutation: an illegal request is a no-op,
//! never an error.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::types::{GameConfig, GameEvent};

/// Lifecycle phase of the round controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, first piece not yet spawned
    Ready,
    Falling,
    Paused,
    GameOver,
}

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing happened (not falling)
    Idle,
    /// The active piece dropped one cell
    Moved,
    /// The active piece landed; rows cleared and points awarded
    Locked { rows: usize, points: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    config: GameConfig,
    level: u32,
    drop_interval_ms: u32,
    phase: Phase,
    won: bool,
}

impl Game {
    /// Create a new game with the given RNG seed and default rules
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self {
            board: Board::with_config(&config),
            active: None,
            rng: SimpleRng::new(seed),
            config,
            level: 1,
            drop_interval_ms: config.base_drop_ms,
            phase: Phase::Ready,
            won: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Falling;
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True iff the game ended by reaching the win score
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Spawn the next piece, checking the game-over condition first.
    ///
    /// Returns false (and transitions to GameOver) if committed tiles have
    /// reached the top row.
    fn spawn_piece(&mut self) -> bool {
        if self.board.top_filled() {
            self.phase = Phase::GameOver;
            self.active = None;
            return false;
        }
        let kind = self.rng.draw_shape();
        let color = self.rng.draw_color();
        self.active = Some(Piece::new(kind, color));
        true
    }

    /// Apply one input event. Illegal or ill-timed events are no-ops.
    ///
    /// Returns whether the event changed anything.
    pub fn handle_event(&mut self, event: GameEvent) -> bool {
        match (self.phase, event) {
            (Phase::Falling, GameEvent::MoveLeft) => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                if self.board.left_blocked(piece) {
                    return false;
                }
                piece.move_left()
            }
            (Phase::Falling, GameEvent::MoveRight) => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                if self.board.right_blocked(piece) {
                    return false;
                }
                piece.move_right()
            }
            (Phase::Falling, GameEvent::SoftDrop) => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                if self.board.base_blocked(piece) {
                    return false;
                }
                piece.move_down()
            }
            (Phase::Falling, GameEvent::Rotate) => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                piece.spin()
            }
            (Phase::Falling, GameEvent::Pause) => {
                self.phase = Phase::Paused;
                true
            }
            (Phase::Paused, GameEvent::Pause) => {
                self.phase = Phase::Falling;
                true
            }
            (_, GameEvent::Quit) => {
                if self.phase == Phase::GameOver {
                    return false;
                }
                self.phase = Phase::GameOver;
                true
            }
            _ => false,
        }
    }

    /// One gravity tick: drop the active piece, or land and resolve it.
    pub fn step(&mut self) -> Step {
        if self.phase != Phase::Falling {
            return Step::Idle;
        }
        let Some(piece) = self.active.as_mut() else {
            return Step::Idle;
        };

        if !self.board.base_blocked(piece) {
            piece.move_down();
            return Step::Moved;
        }

        self.lock_active()
    }

    /// Commit the landed piece, run the clear cascade, and update
    /// score-driven speed/level and the terminal conditions.
    fn lock_active(&mut self) -> Step {
        let Some(piece) = self.active.take() else {
            return Step::Idle;
        };

        self.board.commit(piece);
        let cleared = self.board.clear_full_rows();
        let rows = cleared.len();
        let points = self.board.points_for(rows);

        let score = self.board.score();
        if points > 0 && score > 0 && score % self.config.speed_up_step == 0 {
            self.drop_interval_ms =
                (self.drop_interval_ms * self.config.speed_up_percent / 100).max(1);
            self.level += 1;
        }

        if score >= self.config.win_score {
            self.phase = Phase::GameOver;
            self.won = true;
        } else {
            self.spawn_piece();
        }

        Step::Locked { rows, points }
    }
}
