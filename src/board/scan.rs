//! Line scanner: runs of same-player stones along the four directions.
//!
//! Every direction is handled by the same routine. [`line_starts`] lists
//! the first cell of each line in a direction, [`Board::line`] walks a
//! line from that cell, and [`run_length`] counts consecutive matches,
//! resetting on any other cell.
//!
//! Start cells are computed in closed form from the board size, so every
//! coordinate a scan touches is inside `[0, size)` on both axes.

use serde::{Deserialize, Serialize};

use super::Board;
use crate::core::{Cell, Player, WIN_LENGTH};

/// The four principal line directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Descending,
    /// Bottom-left to top-right.
    Ascending,
}

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Descending,
        Direction::Ascending,
    ];

    /// Step vector `(dx, dy)` in `(row, column)` terms.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Descending => (1, 1),
            Direction::Ascending => (-1, 1),
        }
    }
}

/// Start cells of every line in `direction` holding at least `min_len`
/// cells.
///
/// Rows and columns always span the whole board. Diagonals start on the
/// top row (descending) or bottom row (ascending) and on the left column;
/// with `k = size - min_len`, offsets `0..=k` along each edge are the ones
/// long enough.
///
/// ```
/// use rust_gomoku::board::{line_starts, Direction};
///
/// let starts: Vec<_> = line_starts(6, Direction::Descending, 5).collect();
/// assert_eq!(starts, vec![(0, 0), (0, 1), (1, 0)]);
/// ```
pub fn line_starts(
    size: usize,
    direction: Direction,
    min_len: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let min_len = min_len.max(1);
    let count = if min_len > size {
        0
    } else {
        match direction {
            Direction::Horizontal | Direction::Vertical => size,
            Direction::Descending | Direction::Ascending => 2 * (size - min_len) + 1,
        }
    };
    let k = size.saturating_sub(min_len);

    (0..count).map(move |i| match direction {
        Direction::Horizontal => (i, 0),
        Direction::Vertical => (0, i),
        Direction::Descending if i <= k => (0, i),
        Direction::Descending => (i - k, 0),
        Direction::Ascending if i <= k => (size - 1, i),
        Direction::Ascending => (size - 1 - (i - k), 0),
    })
}

/// Length of the longest run of `target` in `cells`.
///
/// Once a run reaches `stop_at` the scan follows it to its end and returns
/// its full length without looking further. Pass `usize::MAX` to always
/// scan the whole line.
pub fn run_length(cells: impl Iterator<Item = Cell>, target: Cell, stop_at: usize) -> usize {
    let mut longest = 0;
    let mut count = 0;

    for cell in cells {
        if cell == target {
            count += 1;
        } else {
            if count >= stop_at {
                return count;
            }
            longest = longest.max(count);
            count = 0;
        }
    }

    longest.max(count)
}

/// Find a five-or-more run for `player` anywhere on the board.
///
/// Scans rows, then columns, then descending and ascending diagonals, and
/// returns the full length of the first qualifying run. `None` if there is
/// none, which is always the case on boards smaller than `WIN_LENGTH`.
#[must_use]
pub fn find_win(board: &Board, player: Player) -> Option<usize> {
    let target = Cell::from(player);

    for direction in Direction::ALL {
        for (x, y) in line_starts(board.size(), direction, WIN_LENGTH) {
            let run = run_length(board.line(x as i32, y as i32, direction), target, WIN_LENGTH);
            if run >= WIN_LENGTH {
                return Some(run);
            }
        }
    }

    None
}

/// Longest run for `player` in any direction, including runs shorter than
/// five and diagonals too short to ever hold a win.
#[must_use]
pub fn longest_run(board: &Board, player: Player) -> usize {
    let target = Cell::from(player);
    let size = board.size();
    let mut longest = 0;

    for direction in Direction::ALL {
        for (x, y) in line_starts(size, direction, 1) {
            let line = board.line(x as i32, y as i32, direction);
            longest = longest.max(run_length(line, target, usize::MAX));
            if longest == size {
                return longest;
            }
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_line_starts_rows_and_columns() {
        let rows: Vec<_> = line_starts(3, Direction::Horizontal, 1).collect();
        assert_eq!(rows, vec![(0, 0), (1, 0), (2, 0)]);

        let cols: Vec<_> = line_starts(3, Direction::Vertical, 3).collect();
        assert_eq!(cols, vec![(0, 0), (0, 1), (0, 2)]);

        assert_eq!(line_starts(3, Direction::Horizontal, 4).count(), 0);
    }

    #[test]
    fn test_line_starts_diagonals() {
        let desc: Vec<_> = line_starts(3, Direction::Descending, 1).collect();
        assert_eq!(desc, vec![(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);

        let asc: Vec<_> = line_starts(3, Direction::Ascending, 1).collect();
        assert_eq!(asc, vec![(2, 0), (2, 1), (2, 2), (1, 0), (0, 0)]);

        let asc_long: Vec<_> = line_starts(6, Direction::Ascending, 5).collect();
        assert_eq!(asc_long, vec![(5, 0), (5, 1), (4, 0)]);
    }

    #[test]
    fn test_line_starts_cover_every_cell_once() {
        for size in 1..=9 {
            for direction in Direction::ALL {
                let b = Board::new(size).unwrap();
                let mut seen = vec![0; size * size];
                for (x, y) in line_starts(size, direction, 1) {
                    let (dx, dy) = direction.delta();
                    let mut steps = 0;
                    for _ in b.line(x as i32, y as i32, direction) {
                        let cx = x as i32 + dx * steps;
                        let cy = y as i32 + dy * steps;
                        seen[cx as usize * size + cy as usize] += 1;
                        steps += 1;
                    }
                }
                assert!(seen.iter().all(|&n| n == 1), "size {} {:?}", size, direction);
            }
        }
    }

    #[test]
    fn test_win_lines_are_long_enough() {
        for size in 5..=12 {
            let b = Board::new(size).unwrap();
            for direction in Direction::ALL {
                for (x, y) in line_starts(size, direction, WIN_LENGTH) {
                    assert!(b.line(x as i32, y as i32, direction).count() >= WIN_LENGTH);
                }
            }
        }
    }

    #[test]
    fn test_run_length_resets_on_mismatch() {
        use Cell::*;
        let cells = [PlayerA, PlayerA, PlayerB, PlayerA, PlayerA, PlayerA, Empty, PlayerA];
        assert_eq!(run_length(cells.into_iter(), PlayerA, usize::MAX), 3);
        assert_eq!(run_length(cells.into_iter(), PlayerB, usize::MAX), 1);
        assert_eq!(run_length(cells.into_iter(), Empty, usize::MAX), 1);
    }

    #[test]
    fn test_run_length_follows_qualifying_run_to_its_end() {
        use Cell::*;
        let cells = [PlayerA, PlayerA, PlayerA, PlayerA, PlayerA, PlayerA, Empty];
        assert_eq!(run_length(cells.into_iter(), PlayerA, 5), 6);

        let cells = [PlayerA, PlayerA, PlayerA, PlayerA, PlayerA, PlayerA, PlayerA];
        assert_eq!(run_length(cells.into_iter(), PlayerA, 5), 7);
    }

    #[test]
    fn test_find_win_each_direction() {
        let horizontal = board(
            ".......
             .XXXXX.
             .......
             .......
             .......
             .......
             .......",
        );
        assert_eq!(find_win(&horizontal, Player::A), Some(5));
        assert_eq!(find_win(&horizontal, Player::B), None);

        let vertical = board(
            "......O
             ......O
             ......O
             ......O
             ......O
             .......
             .......",
        );
        assert_eq!(find_win(&vertical, Player::B), Some(5));

        let descending = board(
            ".......
             ..X....
             ...X...
             ....X..
             .....X.
             ......X
             .......",
        );
        assert_eq!(find_win(&descending, Player::A), Some(5));

        let ascending = board(
            ".......
             .......
             ....X..
             ...X...
             ..X....
             .X.....
             X......",
        );
        assert_eq!(find_win(&ascending, Player::A), Some(5));
    }

    #[test]
    fn test_find_win_reports_overline_length() {
        let overline = board(
            "......
             ......
             ......
             OOOOOO
             ......
             ......",
        );
        assert_eq!(find_win(&overline, Player::B), Some(6));
    }

    #[test]
    fn test_find_win_corner_diagonals() {
        let top_right = board(
            "....X
             ...X.
             ..X..
             .X...
             X....",
        );
        assert_eq!(find_win(&top_right, Player::A), Some(5));

        let off_main = board(
            "......
             X.....
             .X....
             ..X...
             ...X..
             ....X.",
        );
        assert_eq!(find_win(&off_main, Player::A), Some(5));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let four = board(
            "XXXX.
             .....
             .....
             .....
             .....",
        );
        assert_eq!(find_win(&four, Player::A), None);
        assert_eq!(longest_run(&four, Player::A), 4);
    }

    #[test]
    fn test_small_boards_never_win() {
        let full = board(
            "XXXX
             XXXX
             XXXX
             XXXX",
        );
        assert_eq!(find_win(&full, Player::A), None);
        assert_eq!(longest_run(&full, Player::A), 4);
    }

    #[test]
    fn test_longest_run_counts_short_diagonals() {
        let corner = board(
            ".....
             .....
             .....
             ....O
             ...O.",
        );
        assert_eq!(longest_run(&corner, Player::B), 2);
        assert_eq!(longest_run(&corner, Player::A), 0);
    }

    #[test]
    fn test_longest_run_empty_board() {
        let empty = Board::new(9).unwrap();
        assert_eq!(longest_run(&empty, Player::A), 0);
        assert_eq!(longest_run(&empty, Player::B), 0);
    }
}
