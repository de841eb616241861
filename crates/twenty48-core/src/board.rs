//! The [`Board`]: a square grid of optional [`Tile`]s.
//!
//! A board is a plain value. Moves and spawns produce a new board instead of
//! mutating one that a reader (the view, an animation) may still hold.

use std::fmt;

use crate::error::BoardError;
use crate::geom::{Point, Range};
use crate::tile::{Tile, TileId, is_tile_value};

/// Side length of the classic game.
pub const DEFAULT_SIZE: usize = 4;
/// Smallest supported side length.
pub const MIN_SIZE: usize = 2;
/// Largest supported side length.
pub const MAX_SIZE: usize = 8;

/// A square board of side `size`, indexed by `Point { x: column, y: row }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<Option<Tile>>,
    size: usize,
    /// Next id handed out by [`allocate_id`](Board::allocate_id).
    next_id: u64,
}

impl Board {
    /// An empty board of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size * size],
            size,
            next_id: 0,
        }
    }

    /// Build a board from rows of values, `0` meaning an empty cell.
    ///
    /// ```
    /// use twenty48_core::{Board, Point};
    /// let b = Board::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(b.value_at(Point::new(1, 1)), Some(4));
    /// ```
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::Size(size));
        }
        let mut board = Board::new(size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !is_tile_value(value) {
                    return Err(BoardError::TileValue { row, col, value });
                }
                board.place(Point::new(col as i32, row as i32), value);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The range of valid positions.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size as i32, self.size as i32)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.size + p.x as usize)
        } else {
            None
        }
    }

    /// The tile at `p`, or `None` if the cell is empty or out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).and_then(|i| self.cells[i])
    }

    /// The value at `p`, or `None` if the cell is empty or out of bounds.
    #[inline]
    pub fn value_at(&self, p: Point) -> Option<u64> {
        self.at(p).map(Tile::value)
    }

    /// Replace the content of `p`. No-op outside the board.
    pub(crate) fn set(&mut self, p: Point, tile: Option<Tile>) {
        if let Some(i) = self.index(p) {
            self.cells[i] = tile;
        }
    }

    /// Remove and return the tile at `p`.
    pub(crate) fn take(&mut self, p: Point) -> Option<Tile> {
        self.index(p).and_then(|i| self.cells[i].take())
    }

    /// Hand out a fresh tile id.
    pub(crate) fn allocate_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Put a new unmerged tile of `value` at `p`, replacing whatever was
    /// there. Returns the new tile's id.
    pub(crate) fn place(&mut self, p: Point, value: u64) -> TileId {
        let id = self.allocate_id();
        self.set(p, Some(Tile::new(value, id)));
        id
    }

    /// Clear every tile's merged flag.
    pub(crate) fn clear_merged(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.clear_merged();
        }
    }

    /// Row-major iterator over occupied cells.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds()
            .iter()
            .zip(self.cells.iter())
            .filter_map(|(p, cell)| cell.map(|t| (p, t)))
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        self.bounds()
            .iter()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_none())
            .map(|(p, _)| p)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Highest tile value on the board, 0 when empty.
    pub fn highest_tile(&self) -> u64 {
        self.tiles().map(|(_, t)| t.value()).max().unwrap_or(0)
    }

    /// Values as rows, `0` for empty cells. The inverse of
    /// [`from_rows`](Board::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.map_or(0, Tile::value)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().max(1).to_string().len();
        for row in self.to_rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_json_round_trip() {
        let b = Board::from_rows(&[[2, 0], [0, 4]]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
