//! **twenty48-term**: terminal front-end plumbing for twenty48.
//!
//! Styled cells, a [`Canvas`] with frame diffing, the Elm-architecture
//! [`App`] loop and a crossterm-backed [`CrosstermDriver`].

pub mod app;
pub mod canvas;
pub mod driver;
pub mod messages;
pub mod style;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use canvas::{Canvas, Frame, FrameCell, compute_frame};
pub use driver::CrosstermDriver;
pub use messages::{Key, ModMask, MouseAction, Msg};
pub use style::{AttrMask, Cell, Color, Style};
