//! Elm-architecture Model for the game.

use twenty48_core::{ConfigError, Direction, GameConfig, Session, SwipeTracker, Turn};
use twenty48_term::{
    app::{Effect, Model},
    canvas::Canvas,
    messages::{Key, ModMask, MouseAction, Msg},
};

use crate::gamelog::{GameLog, LogStyle};
use crate::theme::Theme;
use crate::view::{self, View};

/// Tiles from this value upwards are announced in the log.
const NOTABLE_TILE: u64 = 128;
const GOAL_TILE: u64 = 2048;

/// UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Playing,
    Help,
}

/// The twenty48 game model.
pub struct GameModel {
    session: Session,
    theme: Theme,
    log: GameLog,
    mode: Mode,
    swipe: SwipeTracker,
}

impl GameModel {
    pub fn new(config: GameConfig, theme: Theme) -> Result<Self, ConfigError> {
        let swipe = SwipeTracker::new(config.swipe_threshold);
        Ok(Self {
            session: Session::new(config)?,
            theme,
            log: GameLog::new(),
            mode: Mode::Playing,
            swipe,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }
}

impl Model for GameModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                self.log
                    .log("Use the arrow keys or drag with the mouse. Press ? for help.");
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::KeyDown {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.contains(ModMask::CTRL) => Some(Effect::End),
            _ => match self.mode {
                Mode::Playing => self.update_playing(msg),
                Mode::Help => self.update_help(msg),
            },
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        view::draw(
            canvas,
            &View {
                session: &self.session,
                theme: self.theme,
                log: &self.log,
                help: self.mode == Mode::Help,
            },
        );
    }
}

impl GameModel {
    // -------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------

    fn update_playing(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown { key, .. } => self.handle_key(key),
            Msg::Mouse { action, pos } => {
                match action {
                    MouseAction::Main => self.swipe.press(pos),
                    MouseAction::Release => match self.swipe.release(pos) {
                        Some(dir) => {
                            log::debug!("mouse swipe {dir} ending at {pos}");
                            self.swipe_board(dir);
                        }
                        None => log::debug!("mouse drag ending at {pos} too short"),
                    },
                    MouseAction::Secondary => self.swipe.cancel(),
                    MouseAction::Move => {}
                }
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        let dir = match key {
            Key::ArrowUp | Key::Char('k') | Key::Char('w') => Direction::Up,
            Key::ArrowDown | Key::Char('j') | Key::Char('s') => Direction::Down,
            Key::ArrowLeft | Key::Char('h') | Key::Char('a') => Direction::Left,
            Key::ArrowRight | Key::Char('l') | Key::Char('d') => Direction::Right,
            Key::Char('n') | Key::Char('N') => {
                self.new_game();
                return None;
            }
            // Enter dismisses the game-over overlay.
            Key::Enter if self.session.is_over() => {
                self.new_game();
                return None;
            }
            Key::Char('t') | Key::Char('T') => {
                self.theme = self.theme.toggled();
                log::debug!("theme switched to {}", self.theme);
                self.log.log(&format!("Theme: {}.", self.theme));
                return None;
            }
            Key::Char('?') => {
                self.mode = Mode::Help;
                return None;
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape => {
                log::info!("quit requested");
                return Some(Effect::End);
            }
            _ => return None,
        };
        self.swipe_board(dir);
        None
    }

    fn update_help(&mut self, msg: Msg) -> Option<Effect> {
        if let Msg::KeyDown { .. } = msg {
            self.mode = Mode::Playing;
        }
        None
    }

    fn new_game(&mut self) {
        log::info!(
            "new game requested (score {}, best {})",
            self.session.score(),
            self.session.best_score()
        );
        self.session.reset();
        self.swipe.cancel();
        self.log.log("New game.");
    }

    fn swipe_board(&mut self, dir: Direction) {
        let highest = self.session.highest_tile();
        let best = self.session.best_score();
        match self.session.apply(dir) {
            Turn::Ignored => self
                .log
                .log_styled("No moves left. Press n for a new game.", LogStyle::Warning),
            Turn::Unchanged => self.log.log(&format!("Nothing moves {dir}.")),
            Turn::Moved { .. } => self.note_highest(highest),
            Turn::GameOver {
                score, best_score, ..
            } => {
                self.note_highest(highest);
                if best_score > best {
                    self.log
                        .log_styled(&format!("New best score: {score}!"), LogStyle::Notable);
                }
                self.log.log_styled(
                    &format!("Game over with {score} points."),
                    LogStyle::Warning,
                );
            }
        }
    }

    /// Announce a new highest tile.
    fn note_highest(&mut self, before: u64) {
        let now = self.session.highest_tile();
        if now <= before || now < NOTABLE_TILE {
            return;
        }
        let text = if now == GOAL_TILE {
            format!("You made {GOAL_TILE}! Keep going.")
        } else {
            format!("New tile: {now}.")
        };
        self.log.log_styled(&text, LogStyle::Notable);
    }
}
