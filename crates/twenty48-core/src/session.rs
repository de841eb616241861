//! A single game session: board, score and the play / game-over state machine.
//!
//! ```text
//! Playing --swipe--> slide --moved--> spawn --can_move--> Playing
//!                      |                          \--no move--> GameOver
//!                      \--unchanged--> Playing (no spawn)
//! GameOver --reset--> Playing
//! ```

use rand::SeedableRng;
use rand::rngs::{StdRng, SysRng};

use crate::board::Board;
use crate::config::GameConfig;
use crate::engine::{can_move, slide};
use crate::error::ConfigError;
use crate::geom::{Direction, Point};
use crate::spawn::spawn_tile;

/// Session phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Playing,
    /// No move is possible. Only [`Session::reset`] leaves this phase.
    GameOver,
}

/// What a swipe did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The session is over; the input was rejected.
    Ignored,
    /// Nothing could slide in that direction. No tile was spawned.
    Unchanged,
    /// Tiles moved and a new tile was spawned.
    Moved {
        score_delta: u64,
        spawned: Option<Point>,
    },
    /// Tiles moved, a tile was spawned, and no move is left.
    GameOver {
        score_delta: u64,
        spawned: Option<Point>,
        score: u64,
        best_score: u64,
    },
}

impl Turn {
    /// Whether the board changed.
    pub fn moved(&self) -> bool {
        matches!(self, Turn::Moved { .. } | Turn::GameOver { .. })
    }

    /// Points earned by this turn.
    pub fn score_delta(&self) -> u64 {
        match self {
            Turn::Moved { score_delta, .. } | Turn::GameOver { score_delta, .. } => *score_delta,
            _ => 0,
        }
    }
}

/// A game in progress.
///
/// The session is the only writer of its board. Each successful move swaps
/// in a new board and keeps the former one as
/// [`previous_board`](Session::previous_board).
pub struct Session {
    config: GameConfig,
    rng: StdRng,
    board: Board,
    previous: Option<Board>,
    score: u64,
    best_score: u64,
    phase: Phase,
    moves: u32,
}

impl Session {
    /// Start a session with a fresh board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::try_from_rng(&mut SysRng).expect("failed to seed RNG from OS"),
        };
        let mut session = Self {
            board: Board::new(config.size),
            config,
            rng,
            previous: None,
            score: 0,
            best_score: 0,
            phase: Phase::Playing,
            moves: 0,
        };
        session.reset();
        Ok(session)
    }

    /// Start a new game. The best score is kept.
    pub fn reset(&mut self) {
        let mut board = Board::new(self.config.size);
        for _ in 0..self.config.initial_tiles {
            spawn_tile(&mut board, &mut self.rng, self.config.four_probability);
        }
        self.board = board;
        self.previous = None;
        self.score = 0;
        self.phase = Phase::Playing;
        self.moves = 0;
        log::info!("new game: {0}x{0} board", self.config.size);
    }

    /// Slide the board in `direction`.
    pub fn apply(&mut self, direction: Direction) -> Turn {
        if self.phase == Phase::GameOver {
            return Turn::Ignored;
        }

        let outcome = slide(&self.board, direction);
        if !outcome.moved {
            log::debug!("swipe {direction}: nothing moved");
            return Turn::Unchanged;
        }

        let mut board = outcome.board;
        let spawned = spawn_tile(&mut board, &mut self.rng, self.config.four_probability);
        self.previous = Some(std::mem::replace(&mut self.board, board));
        self.score += outcome.score_delta;
        self.moves += 1;
        log::debug!(
            "swipe {direction}: +{} (score {}), spawned at {spawned:?}",
            outcome.score_delta,
            self.score
        );

        if can_move(&self.board) {
            return Turn::Moved {
                score_delta: outcome.score_delta,
                spawned,
            };
        }

        self.end_game();
        Turn::GameOver {
            score_delta: outcome.score_delta,
            spawned,
            score: self.score,
            best_score: self.best_score,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board before the latest successful move.
    #[inline]
    pub fn previous_board(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best final score of this process. Updated when a game ends.
    #[inline]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Successful moves in the current game.
    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn highest_tile(&self) -> u64 {
        self.board.highest_tile()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the board, e.g. to resume from a known position. The phase
    /// follows [`can_move`]; a terminal board ends the game like a final
    /// move would. The score is left as is.
    pub fn set_board(&mut self, board: Board) {
        self.previous = Some(std::mem::replace(&mut self.board, board));
        if can_move(&self.board) {
            self.phase = Phase::Playing;
        } else {
            self.end_game();
        }
    }

    /// Enter `GameOver` and fold the final score into the best score.
    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "game over after {} moves: score {}, best {}",
            self.moves,
            self.score,
            self.best_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        Session::new(GameConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn new_session_has_initial_tiles() {
        let s = session(42);
        assert_eq!(s.board().tiles().count(), 2);
        assert_eq!(s.score(), 0);
        assert_eq!(s.best_score(), 0);
        assert_eq!(s.phase(), Phase::Playing);
        assert!(s.previous_board().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let r = Session::new(GameConfig::default().with_size(0));
        assert!(matches!(r, Err(ConfigError::Size(0))));
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let play = |seed| {
            let mut s = session(seed);
            for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
                s.apply(d);
            }
            (s.board().to_rows(), s.score())
        };
        assert_eq!(play(5), play(5));
    }

    #[test]
    fn unchanged_swipe_does_not_spawn() {
        let mut s = session(1);
        s.set_board(Board::from_rows(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());
        let before = s.board().clone();
        assert_eq!(s.apply(Direction::Left), Turn::Unchanged);
        assert_eq!(s.apply(Direction::Up), Turn::Unchanged);
        assert_eq!(s.board(), &before);
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn moved_swipe_spawns_exactly_one_tile() {
        let mut s = session(1);
        s.set_board(Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());
        let turn = s.apply(Direction::Left);
        assert!(turn.moved());
        assert_eq!(turn.score_delta(), 4);
        assert_eq!(s.score(), 4);
        assert_eq!(s.moves(), 1);
        // one merged tile plus one spawned tile
        assert_eq!(s.board().tiles().count(), 2);
        let Turn::Moved { spawned: Some(p), .. } = turn else {
            panic!("unexpected turn {turn:?}");
        };
        assert!(matches!(s.board().value_at(p), Some(2 | 4)));
        assert_eq!(s.previous_board().map(|b| b.to_rows()[0][0]), Some(2));
    }

    #[test]
    fn game_over_updates_best_score() {
        let mut s = session(3);
        // Sliding right opens (0, 0); a spawned 2 or 4 there has no equal
        // neighbour and the rest of the board is a checkerboard.
        s.set_board(
            Board::from_rows(&[
                [16, 8, 16, 0],
                [32, 8, 16, 8],
                [8, 16, 8, 16],
                [16, 8, 16, 8],
            ])
            .unwrap(),
        );
        let turn = s.apply(Direction::Right);
        let Turn::GameOver {
            score, best_score, ..
        } = turn
        else {
            panic!("expected game over, got {turn:?}");
        };
        assert_eq!(score, 0);
        assert_eq!(best_score, 0);
        assert!(s.is_over());
        assert_eq!(s.apply(Direction::Left), Turn::Ignored);
    }

    #[test]
    fn best_score_survives_reset() {
        let mut s = session(3);
        s.set_board(
            Board::from_rows(&[
                [32, 4, 4, 16],
                [16, 8, 16, 8],
                [8, 16, 8, 16],
                [16, 8, 16, 8],
            ])
            .unwrap(),
        );
        // [32, 4, 4, 16] -> [_, 32, 8, 16]; the spawn fills the gap.
        let turn = s.apply(Direction::Right);
        assert_eq!(turn.score_delta(), 8);
        assert!(matches!(turn, Turn::GameOver { score: 8, best_score: 8, .. }));
        assert_eq!(s.best_score(), 8);

        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.best_score(), 8);
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.board().tiles().count(), 2);
    }

    #[test]
    fn best_score_only_moves_at_game_over() {
        let mut s = session(11);
        s.set_board(Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());
        s.apply(Direction::Left);
        assert_eq!(s.score(), 4);
        assert_eq!(s.best_score(), 0);
        s.reset();
        assert_eq!(s.best_score(), 0);
    }

    #[test]
    fn set_board_detects_terminal_position() {
        let mut s = session(1);
        s.set_board(Board::from_rows(&[[2, 4], [4, 2]]).unwrap());
        assert!(s.is_over());
        assert_eq!(s.apply(Direction::Up), Turn::Ignored);
    }

    #[test]
    fn terminal_set_board_updates_best_score() {
        let mut s = session(11);
        s.set_board(Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());
        s.apply(Direction::Left);
        assert_eq!(s.score(), 4);
        assert_eq!(s.best_score(), 0);

        s.set_board(Board::from_rows(&[[2, 4], [4, 2]]).unwrap());
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(s.score(), 4);
        assert_eq!(s.best_score(), 4);

        // A playable board does not touch the best score.
        s.set_board(Board::from_rows(&[[2, 0], [0, 0]]).unwrap());
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.best_score(), 4);
    }

    #[test]
    fn random_play_reaches_game_over() {
        let mut s = Session::new(GameConfig::default().with_seed(77).with_size(2)).unwrap();
        let mut turns = 0;
        while !s.is_over() && turns < 10_000 {
            for d in Direction::ALL {
                s.apply(d);
            }
            turns += 1;
        }
        assert!(s.is_over());
        assert_eq!(s.best_score(), s.score());
        assert!(s.board().is_full());
    }
}
