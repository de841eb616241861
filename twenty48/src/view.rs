//! Drawing: header, board, message log, key hints and overlays.

use twenty48_core::{Board, Point, Range, Session, Tile};
use twenty48_term::canvas::Canvas;
use twenty48_term::style::{AttrMask, Cell, Style};

use crate::gamelog::{GameLog, LogStyle};
use crate::theme::{self, Palette, Theme};

/// Rows above the board: title and scores, move counter, spacing.
const HEADER_ROWS: i32 = 3;
/// Rows below the board: two log lines and the key hints.
const FOOTER_ROWS: i32 = 3;
const LOG_LINES: usize = 2;

/// Tile sizes in cells, tried largest first.
const TILE_SIZES: [(i32, i32); 4] = [(7, 3), (6, 3), (5, 1), (4, 1)];

const KEY_HINTS: &str = "arrows/hjkl/wasd move  n new  t theme  ? help  q quit";

const HELP_TEXT: &str = "\
HOW TO PLAY

Slide every tile with the arrow keys,
hjkl or wasd, or drag with the mouse.
Two equal tiles that collide merge
into one worth their sum.
After each move a 2 or a 4 appears.
The game ends when no move is left.

n  new game     t  light/dark theme
?  this help    q  quit
Enter also starts a new game once over.

press any key to continue";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where the board lands on a canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame.
    pub origin: Point,
    pub tile_w: i32,
    pub tile_h: i32,
    /// Board side length in tiles.
    pub size: i32,
}

impl Layout {
    /// The largest tile size whose board, header and footer fit in
    /// `screen`, with the board centred horizontally. Falls back to the
    /// smallest size when nothing fits.
    pub fn fit(board_size: usize, screen: Point) -> Self {
        let size = board_size as i32;
        let (tile_w, tile_h) = TILE_SIZES
            .iter()
            .copied()
            .find(|&(w, h)| {
                size * (w + 1) < screen.x
                    && size * (h + 1) + 1 + HEADER_ROWS + FOOTER_ROWS <= screen.y
            })
            .unwrap_or(TILE_SIZES[TILE_SIZES.len() - 1]);
        let width = size * (tile_w + 1) + 1;
        Self {
            origin: Point::new(((screen.x - width) / 2).max(0), HEADER_ROWS),
            tile_w,
            tile_h,
            size,
        }
    }

    pub fn board_width(&self) -> i32 {
        self.size * (self.tile_w + 1) + 1
    }

    pub fn board_height(&self) -> i32 {
        self.size * (self.tile_h + 1) + 1
    }

    /// The board including its frame.
    pub fn board_range(&self) -> Range {
        Range::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.board_width(),
            self.origin.y + self.board_height(),
        )
    }

    /// Screen cells of the board cell `p`.
    pub fn tile_range(&self, p: Point) -> Range {
        let x = self.origin.x + 1 + p.x * (self.tile_w + 1);
        let y = self.origin.y + 1 + p.y * (self.tile_h + 1);
        Range::new(x, y, x + self.tile_w, y + self.tile_h)
    }
}

/// Text shown on a tile `width` cells wide: the value, or `2^n` when the
/// value does not fit.
pub fn tile_label(value: u64, width: i32) -> String {
    let digits = value.to_string();
    if digits.len() as i32 <= width {
        digits
    } else {
        format!("2^{}", value.trailing_zeros())
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

/// Everything the view reads. Borrowed from the model for one frame.
pub struct View<'a> {
    pub session: &'a Session,
    pub theme: Theme,
    pub log: &'a GameLog,
    pub help: bool,
}

pub fn draw(canvas: &mut Canvas, view: &View<'_>) {
    let pal = view.theme.palette();
    canvas.fill(Cell::new(' ', Style::colors(pal.text, pal.background)));

    let layout = Layout::fit(view.session.board().size(), canvas.size());
    if view.help {
        draw_help(canvas, pal);
        return;
    }
    draw_header(canvas, &layout, view.session, pal);
    draw_board(canvas, &layout, view.session, pal);
    if view.session.is_over() {
        draw_game_over(canvas, &layout, view.session, pal);
    }
    draw_footer(canvas, &layout, view.log, pal);
}

fn draw_header(canvas: &mut Canvas, layout: &Layout, session: &Session, pal: &Palette) {
    let base = Style::colors(pal.text, pal.background);
    let x = layout.origin.x;
    canvas.text(Point::new(x, 0), "2048", base.with_attrs(AttrMask::BOLD));

    let boxes = format!(
        " SCORE {} \u{2502} BEST {} ",
        session.score(),
        session.best_score()
    );
    let right = x + layout.board_width();
    let bx = (right - boxes.chars().count() as i32).max(x + 5);
    canvas.text(
        Point::new(bx, 0),
        &boxes,
        Style::colors(pal.accent_text, pal.accent).with_attrs(AttrMask::BOLD),
    );

    let info = format!("moves {}", session.moves());
    canvas.text(Point::new(x, 1), &info, base.with_fg(pal.muted));
}

fn draw_board(canvas: &mut Canvas, layout: &Layout, session: &Session, pal: &Palette) {
    canvas.fill_range(
        layout.board_range(),
        Cell::new(' ', Style::colors(pal.text, pal.grid)),
    );
    let board = session.board();
    for p in board.bounds() {
        let r = layout.tile_range(p);
        match board.at(p) {
            None => canvas.fill_range(r, Cell::new(' ', Style::colors(pal.text, pal.empty))),
            Some(tile) => draw_tile(canvas, layout, r, tile, session.previous_board()),
        }
    }
}

fn draw_tile(canvas: &mut Canvas, layout: &Layout, r: Range, tile: Tile, prev: Option<&Board>) {
    let bg = theme::tile_bg(tile.value());
    let style = Style::colors(theme::tile_fg(tile.value()), bg);
    canvas.fill_range(r, Cell::new(' ', style));

    // Merged tiles are underlined; the freshly spawned one is dimmed.
    let spawned = !tile.is_merged()
        && prev.is_some_and(|b| b.tiles().all(|(_, t)| t.id() != tile.id()));
    let attrs = if tile.is_merged() {
        AttrMask::BOLD | AttrMask::UNDERLINE
    } else if spawned {
        AttrMask::BOLD | AttrMask::DIM
    } else {
        AttrMask::BOLD
    };
    let label = tile_label(tile.value(), layout.tile_w);
    canvas.text_centered(r, layout.tile_h / 2, &label, style.with_attrs(attrs));
}

fn draw_game_over(canvas: &mut Canvas, layout: &Layout, session: &Session, pal: &Palette) {
    let board = layout.board_range();
    let mid = board.min.y + board.height() / 2;
    let r = Range::new(board.min.x + 1, mid - 1, board.max.x - 1, mid + 2);
    let style = Style::colors(pal.accent_text, pal.accent);
    canvas.fill_range(r, Cell::new(' ', style));
    canvas.text_centered(r, 0, "GAME OVER", style.with_attrs(AttrMask::BOLD));
    let scores = format!("score {}  best {}", session.score(), session.best_score());
    canvas.text_centered(r, 1, &scores, style);
    canvas.text_centered(r, 2, "press n for a new game", style);
}

fn draw_footer(canvas: &mut Canvas, layout: &Layout, log: &GameLog, pal: &Palette) {
    let y = layout.board_range().max.y;
    let entries = log.recent(LOG_LINES);
    let newest = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let fg = match entry.style {
            LogStyle::Warning => pal.warning,
            LogStyle::Notable => pal.accent,
            LogStyle::Normal if i == newest => pal.text,
            LogStyle::Normal => pal.muted,
        };
        canvas.text(
            Point::new(layout.origin.x, y + i as i32),
            &entry.display(),
            Style::colors(fg, pal.background),
        );
    }
    canvas.text_centered(
        canvas.bounds(),
        y + LOG_LINES as i32,
        KEY_HINTS,
        Style::colors(pal.muted, pal.background),
    );
}

fn draw_help(canvas: &mut Canvas, pal: &Palette) {
    let lines: Vec<&str> = HELP_TEXT.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let height = lines.len() as i32;
    let x = ((canvas.width() - width) / 2).max(0);
    let y = ((canvas.height() - height) / 2).max(0);
    let base = Style::colors(pal.text, pal.background);
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 {
            base.with_attrs(AttrMask::BOLD)
        } else if i + 1 == lines.len() {
            base.with_fg(pal.muted)
        } else {
            base
        };
        canvas.text(Point::new(x, y + i as i32), line, style);
    }
}
