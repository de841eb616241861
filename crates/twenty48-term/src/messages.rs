//! Input events: [`Msg`], [`Key`], [`MouseAction`], [`ModMask`].

use twenty48_core::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    /// A printable character.
    Char(char),
}

/// Bitmask of modifier keys held during an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const CTRL: Self = Self(1 << 0);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved, with or without a button held.
    Move,
}

/// An input message delivered to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyDown { key: Key, modifiers: ModMask },
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
    /// Sent once when the application starts.
    Init,
    /// The driver asks the application to stop.
    Quit,
}

impl Msg {
    /// A `KeyDown` with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: ModMask::NONE,
        }
    }

    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse { action, pos }
    }
}
