//! twenty48: the sliding-merge tile game in a terminal.

pub mod cli;
pub mod gamelog;
pub mod model;
pub mod theme;
pub mod view;

pub use model::GameModel;
pub use theme::Theme;

/// Canvas size used until the terminal reports its own.
pub const UI_WIDTH: i32 = 80;
pub const UI_HEIGHT: i32 = 24;
