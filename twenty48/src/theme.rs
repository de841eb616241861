//! Colour palettes.
//!
//! Tile colours are shared by both themes; the theme only changes the
//! screen around the board.

use std::fmt;

use twenty48_term::style::Color;

// -- Tiles --

/// Empty board cell.
pub const EMPTY_CELL: Color = Color::from_hex(0xcdc1b4);
/// Every tile above 2048.
pub const SUPER_TILE: Color = Color::from_hex(0x3c3a32);
/// Dark text on the light low-value tiles.
pub const TILE_TEXT_DARK: Color = Color::from_hex(0x776e65);
/// Light text on everything from 8 upwards.
pub const TILE_TEXT_LIGHT: Color = Color::from_hex(0xf9f6f2);

/// Background colour of a tile.
pub fn tile_bg(value: u64) -> Color {
    match value {
        2 => Color::from_hex(0xeee4da),
        4 => Color::from_hex(0xede0c8),
        8 => Color::from_hex(0xf2b179),
        16 => Color::from_hex(0xf59563),
        32 => Color::from_hex(0xf67c5f),
        64 => Color::from_hex(0xf65e3b),
        128 => Color::from_hex(0xedcf72),
        256 => Color::from_hex(0xedcc61),
        512 => Color::from_hex(0xedc850),
        1024 => Color::from_hex(0xedc53f),
        2048 => Color::from_hex(0xedc22e),
        _ => SUPER_TILE,
    }
}

/// Text colour of a tile.
pub fn tile_fg(value: u64) -> Color {
    if value <= 4 {
        TILE_TEXT_DARK
    } else {
        TILE_TEXT_LIGHT
    }
}

// -- Screen --

/// Colours for everything that is not a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Secondary text: hints, older log lines.
    pub muted: Color,
    /// Gaps between board cells.
    pub grid: Color,
    pub empty: Color,
    /// Score boxes and highlighted messages.
    pub accent: Color,
    pub accent_text: Color,
    pub warning: Color,
}

const LIGHT: Palette = Palette {
    background: Color::from_hex(0xfaf8ef),
    text: Color::from_hex(0x776e65),
    muted: Color::from_hex(0xa39889),
    grid: Color::from_hex(0xbbada0),
    empty: EMPTY_CELL,
    accent: Color::from_hex(0x8f7a66),
    accent_text: Color::from_hex(0xf9f6f2),
    warning: Color::from_hex(0xf65e3b),
};

const DARK: Palette = Palette {
    background: Color::from_hex(0x000000),
    text: Color::from_hex(0xffffff),
    muted: Color::from_hex(0x8e8e93),
    grid: Color::from_hex(0x272729),
    empty: Color::from_hex(0x1c1c1e),
    accent: Color::from_hex(0x2f95dc),
    accent_text: Color::from_hex(0xffffff),
    warning: Color::from_hex(0xf67c5f),
};

/// Light or dark screen theme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_colours() {
        assert_eq!(tile_bg(2), Color::from_hex(0xeee4da));
        assert_eq!(tile_bg(2048), Color::from_hex(0xedc22e));
        assert_eq!(tile_bg(4096), SUPER_TILE);
        assert_eq!(tile_bg(1 << 20), SUPER_TILE);
        assert_ne!(tile_bg(4096), EMPTY_CELL);
        assert_eq!(tile_fg(4096), TILE_TEXT_LIGHT);
        assert_eq!(tile_fg(4), TILE_TEXT_DARK);
        assert_eq!(tile_fg(8), TILE_TEXT_LIGHT);
    }

    #[test]
    fn toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn dark_background_is_not_terminal_default() {
        assert_ne!(Theme::Dark.palette().background, Color::DEFAULT);
    }
}
