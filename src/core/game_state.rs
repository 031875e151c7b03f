//! Game state module - orchestrates board, piece, score and lifecycle.
//!
//! Single-threaded and synchronous: each intent or tick runs to completion
//! before the next is accepted. The board and piece are owned exclusively
//! here and mutated only through the operations below; rendering borrows
//! read-only views.

use crate::core::config::GridConfig;
use crate::core::lines::clear_full_lines;
use crate::core::motion::{overlaps, try_move, Piece};
use crate::core::rng::{random_shape, SimpleRng};
use crate::core::Board;
use crate::types::{GameAction, DEFAULT_FALL_MS, POINTS_PER_LINE, SOFT_DROP_FALL_MS};

/// Complete game state: board, active piece, score and pause status.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    score_current: u32,
    /// Best episode score this process run; survives resets, not restarts
    /// of the process.
    score_highest: u32,
    paused: bool,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
}

impl GameState {
    /// Create a game on a clean board and spawn the first piece.
    pub fn new(config: GridConfig, seed: u32) -> Self {
        let board = Board::new(config);
        let mut rng = SimpleRng::new(seed);
        let (kind, rotation) = random_shape(&mut rng);
        // The first spawn can never collide on a fresh board.
        let piece = Piece::spawn(kind, rotation, config);
        debug_assert!(!overlaps(&board, piece.shape(), piece.x, piece.y));

        Self {
            board,
            piece,
            rng,
            score_current: 0,
            score_highest: 0,
            paused: false,
            fall_interval_ms: DEFAULT_FALL_MS,
            fall_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for drivers and tests that construct scenarios.
    /// Gameplay never needs this.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn score_current(&self) -> u32 {
        self.score_current
    }

    pub fn score_highest(&self) -> u32 {
        self.score_highest
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Shorten the fall interval while soft drop is held, restore it on
    /// release. Takes effect on the next tick.
    pub fn set_soft_drop(&mut self, held: bool) {
        self.fall_interval_ms = if held {
            SOFT_DROP_FALL_MS
        } else {
            DEFAULT_FALL_MS
        };
    }

    /// Spawn the next piece; on spawn collision, run the game-over
    /// transition and spawn onto the reset board.
    ///
    /// Game over is not a resting state: the loop below maxes the high
    /// score, wipes the board and re-enters play. It settles after at most
    /// one reset, since a reset interior can never block the spawn frame.
    pub fn spawn_piece(&mut self) {
        loop {
            let (kind, rotation) = random_shape(&mut self.rng);
            let candidate = Piece::spawn(kind, rotation, self.board.config());
            if !overlaps(&self.board, candidate.shape(), candidate.x, candidate.y) {
                self.piece = candidate;
                return;
            }
            self.finish_episode();
        }
    }

    /// Record the episode's score and wipe the board for the next one.
    fn finish_episode(&mut self) {
        self.score_highest = self.score_highest.max(self.score_current);
        self.score_current = 0;
        self.board.reset();
    }

    /// One natural-fall evaluation: step the piece down, or commit it and
    /// start the next one. No-op while paused.
    pub fn natural_fall(&mut self) {
        if self.paused {
            return;
        }
        match try_move(&self.board, &self.piece, 0, 1, 0) {
            Some(moved) => self.piece = moved,
            None => {
                self.board
                    .merge_shape(self.piece.shape(), self.piece.x, self.piece.y);
                let cleared = clear_full_lines(&mut self.board);
                self.score_current += cleared * POINTS_PER_LINE;
                self.spawn_piece();
            }
        }
    }

    /// Feed elapsed wall time; runs one natural fall per full fall interval
    /// accumulated, repeatedly if several have elapsed. No ticks are
    /// skipped or coalesced.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.fall_timer_ms += elapsed_ms;
        while self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms -= self.fall_interval_ms;
            self.natural_fall();
        }
    }

    /// Apply a discrete input intent. Returns whether it changed anything.
    ///
    /// Movement and rotation are ignored while paused; pause-toggle and
    /// restart are always honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.paused && !matches!(action, GameAction::Pause | GameAction::Restart) {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.attempt(-1, 0, 0),
            GameAction::MoveRight => self.attempt(1, 0, 0),
            GameAction::RotateCw => self.attempt(0, 0, 1),
            GameAction::RotateCcw => self.attempt(0, 0, -1),
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.finish_episode();
                self.spawn_piece();
                self.fall_timer_ms = 0;
                true
            }
        }
    }

    fn attempt(&mut self, dx: i8, dy: i8, drot: i8) -> bool {
        match try_move(&self.board, &self.piece, dx, dy, drot) {
            Some(moved) => {
                self.piece = moved;
                true
            }
            None => false,
        }
    }
}
