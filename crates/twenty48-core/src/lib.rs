//! **twenty48-core**: the sliding-merge tile game, without any UI.
//!
//! - [`slide`] and [`can_move`]: the pure merge engine.
//! - [`spawn_tile`]: random tile placement driven by a caller-supplied RNG.
//! - [`Session`]: board, score, best score and the game-over state machine.
//! - [`classify`] / [`SwipeTracker`]: pointer gestures to [`Direction`]s.
//!
//! ```
//! use twenty48_core::{Direction, GameConfig, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(42)).unwrap();
//! let turn = session.apply(Direction::Left);
//! assert!(session.board().tiles().count() >= 2);
//! assert_eq!(session.score(), turn.score_delta());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod geom;
pub mod session;
pub mod spawn;
pub mod swipe;
pub mod tile;

pub use board::Board;
pub use config::GameConfig;
pub use engine::{MoveOutcome, can_move, legal_directions, slide};
pub use error::{BoardError, ConfigError};
pub use geom::{Direction, Point, Range};
pub use session::{Phase, Session, Turn};
pub use spawn::spawn_tile;
pub use swipe::{SwipeTracker, classify};
pub use tile::{Tile, TileId};
