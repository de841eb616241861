//! The merge engine: [`slide`] and [`can_move`].
//!
//! Both are pure functions of the board. One rule drives all four
//! directions: cells are visited starting from the target edge, and each tile
//! takes unit steps along [`Direction::delta`] until it leaves the empty
//! run, merges, or is blocked.

use crate::board::Board;
use crate::geom::{Direction, Point};
use crate::tile::Tile;

/// Result of sliding a board in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the slide. Merged tiles carry `is_merged() == true`.
    pub board: Board,
    /// Sum of the values created by merges.
    pub score_delta: u64,
    /// Whether any tile changed cell or merged.
    pub moved: bool,
}

/// Slide every tile toward the `direction` edge, merging equal neighbours.
///
/// A tile created by a merge cannot take part in a second merge during the
/// same slide, so `[2, 2, 2, 2]` slides left to `[4, 4, _, _]`.
///
/// ```
/// use twenty48_core::{Board, Direction, slide};
/// let b = Board::from_rows(&[[2, 0, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let out = slide(&b, Direction::Left);
/// assert_eq!(out.board.to_rows()[0], vec![4, 2, 0, 0]);
/// assert_eq!(out.score_delta, 4);
/// assert!(out.moved);
/// ```
pub fn slide(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = board.clone();
    next.clear_merged();

    let step = direction.delta();
    let mut score_delta = 0;
    let mut moved = false;

    for start in scan_order(board, direction) {
        let Some(tile) = next.at(start) else {
            continue;
        };
        let mut pos = start;
        loop {
            let dest = pos + step;
            if !next.contains(dest) {
                break;
            }
            match next.at(dest) {
                None => {
                    let t = next.take(pos);
                    next.set(dest, t);
                    pos = dest;
                    moved = true;
                }
                Some(other) if other.value() == tile.value() && !other.is_merged() => {
                    next.take(pos);
                    let value = tile.value() * 2;
                    let id = next.allocate_id();
                    next.set(dest, Some(Tile::merged(value, id)));
                    score_delta += value;
                    moved = true;
                    break;
                }
                Some(_) => break,
            }
        }
    }

    MoveOutcome {
        board: next,
        score_delta,
        moved,
    }
}

/// Whether any move is still possible: an empty cell exists, or two
/// horizontally or vertically adjacent tiles share a value.
pub fn can_move(board: &Board) -> bool {
    if !board.is_full() {
        return true;
    }
    board.tiles().any(|(p, tile)| {
        [Point::new(1, 0), Point::new(0, 1)]
            .into_iter()
            .any(|d| board.value_at(p + d) == Some(tile.value()))
    })
}

/// Directions in which [`slide`] would change the board.
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| slide(board, d).moved)
        .collect()
}

/// Every position, nearest to the target edge first. Ties (cells at the same
/// distance) keep row-major order; they never interact within a slide.
fn scan_order(board: &Board, direction: Direction) -> Vec<Point> {
    let step = direction.delta();
    let mut cells: Vec<Point> = board.bounds().iter().collect();
    cells.sort_by_key(|p| std::cmp::Reverse(p.dot(step)));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[[u64; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn first_row(values: [u64; 4]) -> Board {
        board(&[values, [0; 4], [0; 4], [0; 4]])
    }

    /// Transpose rows and columns, keeping values only.
    fn transpose(rows: &[Vec<u64>]) -> Vec<Vec<u64>> {
        let n = rows.len();
        (0..n).map(|c| (0..n).map(|r| rows[r][c]).collect()).collect()
    }

    fn mirror(rows: &[Vec<u64>]) -> Vec<Vec<u64>> {
        rows.iter()
            .map(|r| r.iter().rev().copied().collect())
            .collect()
    }

    #[test]
    fn pair_merges_to_the_left() {
        let out = slide(&first_row([2, 2, 0, 0]), Direction::Left);
        assert_eq!(out.board.to_rows()[0], vec![4, 0, 0, 0]);
        assert_eq!(out.score_delta, 4);
        assert!(out.moved);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let out = slide(&first_row([2, 0, 2, 2]), Direction::Left);
        assert_eq!(out.board.to_rows()[0], vec![4, 2, 0, 0]);
        assert_eq!(out.score_delta, 4);

        let out = slide(&first_row([2, 2, 2, 2]), Direction::Left);
        assert_eq!(out.board.to_rows()[0], vec![4, 4, 0, 0]);
        assert_eq!(out.score_delta, 8);

        let out = slide(&first_row([4, 2, 2, 0]), Direction::Left);
        assert_eq!(out.board.to_rows()[0], vec![4, 4, 0, 0]);
        assert_eq!(out.score_delta, 4);
    }

    #[test]
    fn leading_pair_merges_first() {
        let out = slide(&first_row([2, 2, 2, 0]), Direction::Left);
        assert_eq!(out.board.to_rows()[0], vec![4, 2, 0, 0]);
        let out = slide(&first_row([2, 2, 2, 0]), Direction::Right);
        assert_eq!(out.board.to_rows()[0], vec![0, 0, 2, 4]);
    }

    #[test]
    fn different_values_block() {
        let b = first_row([2, 4, 8, 16]);
        let out = slide(&b, Direction::Left);
        assert!(!out.moved);
        assert_eq!(out.score_delta, 0);
        assert_eq!(out.board, b);
    }

    #[test]
    fn empty_board_never_moves() {
        let b = Board::new(4);
        for d in Direction::ALL {
            let out = slide(&b, d);
            assert!(!out.moved);
            assert_eq!(out.score_delta, 0);
            assert_eq!(out.board, b);
        }
    }

    #[test]
    fn merge_leaves_one_doubled_tile() {
        let b = board(&[[0, 0, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 8, 0, 0]]);
        let out = slide(&b, Direction::Up);
        assert_eq!(out.board.tiles().count(), 1);
        let (p, tile) = out.board.tiles().next().unwrap();
        assert_eq!(p, Point::new(1, 0));
        assert_eq!(tile.value(), 16);
        assert!(tile.is_merged());
        assert_eq!(out.score_delta, 16);
        assert_eq!(out.board.at(Point::new(1, 3)), None);
    }

    #[test]
    fn merged_flags_clear_on_next_slide() {
        let first = slide(&first_row([2, 2, 0, 0]), Direction::Left);
        assert!(first.board.at(Point::new(0, 0)).unwrap().is_merged());
        let second = slide(&first.board, Direction::Down);
        assert!(second.moved);
        assert!(second.board.tiles().all(|(_, t)| !t.is_merged()));
    }

    #[test]
    fn merge_creates_a_new_identity() {
        let b = first_row([2, 2, 0, 0]);
        let before: Vec<_> = b.tiles().map(|(_, t)| t.id()).collect();
        let out = slide(&b, Direction::Left);
        let merged = out.board.at(Point::new(0, 0)).unwrap();
        assert!(!before.contains(&merged.id()));
    }

    #[test]
    fn sliding_keeps_identity() {
        let b = first_row([0, 0, 0, 2]);
        let id = b.at(Point::new(3, 0)).unwrap().id();
        let out = slide(&b, Direction::Left);
        assert_eq!(out.board.at(Point::new(0, 0)).unwrap().id(), id);
    }

    #[test]
    fn unchanged_slide_returns_identical_board() {
        let b = board(&[[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [16, 2, 0, 0]]);
        let out = slide(&b, Direction::Left);
        assert!(!out.moved);
        assert_eq!(out.board, b);
    }

    #[test]
    fn second_slide_without_merges_is_a_no_op() {
        let b = board(&[[0, 2, 0, 4], [8, 0, 0, 2], [0, 0, 16, 0], [2, 4, 0, 8]]);
        for d in Direction::ALL {
            let once = slide(&b, d);
            assert!(once.moved);
            let twice = slide(&once.board, d);
            assert!(!twice.moved, "second slide {d} moved");
            assert_eq!(twice.board.to_rows(), once.board.to_rows());
        }
    }

    #[test]
    fn directions_are_symmetric() {
        let b = board(&[[2, 2, 2, 0], [4, 0, 4, 4], [0, 8, 8, 8], [2, 4, 2, 4]]);
        let rows = b.to_rows();

        let left = slide(&b, Direction::Left);
        let right_of_mirror = slide(&Board::from_rows(&mirror(&rows)).unwrap(), Direction::Right);
        assert_eq!(mirror(&right_of_mirror.board.to_rows()), left.board.to_rows());
        assert_eq!(right_of_mirror.score_delta, left.score_delta);

        let up_of_transpose = slide(&Board::from_rows(&transpose(&rows)).unwrap(), Direction::Up);
        assert_eq!(transpose(&up_of_transpose.board.to_rows()), left.board.to_rows());
        assert_eq!(up_of_transpose.score_delta, left.score_delta);

        let down = slide(
            &Board::from_rows(&mirror(&transpose(&rows))).unwrap(),
            Direction::Down,
        );
        let expected = slide(
            &Board::from_rows(&transpose(&mirror(&transpose(&rows)))).unwrap(),
            Direction::Right,
        );
        assert_eq!(transpose(&down.board.to_rows()), expected.board.to_rows());
    }

    #[test]
    fn slide_is_deterministic() {
        let b = board(&[[2, 2, 4, 8], [0, 2, 2, 0], [4, 4, 4, 4], [0, 0, 0, 2]]);
        for d in Direction::ALL {
            assert_eq!(slide(&b, d), slide(&b, d));
        }
    }

    #[test]
    fn slide_does_not_touch_input() {
        let b = first_row([2, 2, 0, 0]);
        let copy = b.clone();
        let _ = slide(&b, Direction::Left);
        assert_eq!(b, copy);
    }

    #[test]
    fn can_move_with_empty_cell() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(can_move(&b));
    }

    #[test]
    fn can_move_with_equal_neighbours() {
        let horizontal = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(can_move(&horizontal));
        let vertical = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);
        assert!(can_move(&vertical));
    }

    #[test]
    fn full_board_without_pairs_is_terminal() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!can_move(&b));
        assert!(legal_directions(&b).is_empty());
    }

    #[test]
    fn can_move_agrees_with_legal_directions() {
        let boards = [
            board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]),
            board(&[[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 256]]),
            first_row([2, 0, 0, 0]),
        ];
        for b in &boards {
            assert_eq!(can_move(b), !legal_directions(b).is_empty());
        }
    }

    #[test]
    fn legal_directions_of_corner_tile() {
        let b = first_row([2, 0, 0, 0]);
        assert_eq!(legal_directions(&b), vec![Direction::Down, Direction::Right]);
    }
}
