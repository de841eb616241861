//! The [`Canvas`] a model draws into, and the [`Frame`] diff sent to drivers.

use twenty48_core::{Point, Range};

use crate::style::{Cell, Style};

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A fixed-size 2D buffer of [`Cell`]s. Drawing outside the bounds is
/// silently clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// A blank canvas. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The cell at `p`, or a blank cell outside the canvas.
    pub fn at(&self, p: Point) -> Cell {
        self.index(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the part of `r` that lies on the canvas.
    pub fn fill_range(&mut self, r: Range, cell: Cell) {
        for p in r.intersect(self.bounds()).iter() {
            self.set(p, cell);
        }
    }

    /// Write `text` on one line starting at `p`, clipped to the canvas.
    /// Returns the position just after the last character.
    pub fn text(&mut self, p: Point, text: &str, style: Style) -> Point {
        let mut cur = p;
        for ch in text.chars() {
            self.set(cur, Cell::new(ch, style));
            cur = cur.shift(1, 0);
        }
        cur
    }

    /// Write `text` centred on row `y` of range `r`. Text wider than the
    /// range starts at its left edge.
    pub fn text_centered(&mut self, r: Range, y: i32, text: &str, style: Style) {
        let len = text.chars().count() as i32;
        let x = r.min.x + ((r.width() - len) / 2).max(0);
        self.text(Point::new(x, r.min.y + y), text, style);
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// The characters of row `y`, for tests and debugging.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width).map(|x| self.at(Point::new(x, y)).ch).collect()
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// The cells to repaint to turn the previous screen into the current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    /// Every cell of `canvas`, for a full repaint.
    pub fn full(canvas: &Canvas) -> Self {
        Self {
            cells: canvas
                .iter()
                .map(|(pos, cell)| FrameCell { cell, pos })
                .collect(),
            width: canvas.width(),
            height: canvas.height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Cells of `curr` that differ from `prev`. Canvases of different sizes
/// produce a full frame.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    if prev.size() != curr.size() {
        return Frame::full(curr);
    }
    let cells = prev
        .iter()
        .zip(curr.iter())
        .filter(|((_, a), (_, b))| a != b)
        .map(|(_, (pos, cell))| FrameCell { cell, pos })
        .collect();
    Frame {
        cells,
        width: curr.width(),
        height: curr.height(),
    }
}
