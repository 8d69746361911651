//! N×N cell grid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scan::Direction;
use crate::core::{BoardConfig, Cell, MAX_BOARD_SIZE};
use crate::error::GomokuError;

/// Square grid of cells, stored row-major.
///
/// Coordinates are `(x, y)` = `(row, column)`, both zero-based. Signed
/// coordinates are accepted everywhere a caller might hand in an
/// unchecked value; anything outside `[0, size)` simply has no cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked serde form of [`Board`]. Deserialized snapshots go through
/// `TryFrom` so a board always holds `size * size` cells of a valid size.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GomokuError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.size).validate()?;
        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(GomokuError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board, validating the size.
    pub fn new(size: usize) -> Result<Self, GomokuError> {
        BoardConfig::new(size).validate()?;
        Ok(Self::empty(size))
    }

    /// Create an empty board of an already-validated size.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is `(x, y)` on the board?
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let n = self.size as i32;
        x >= 0 && x < n && y >= 0 && y < n
    }

    /// Cell at `(x, y)`, or `None` when off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[x as usize * self.size + y as usize])
        } else {
            None
        }
    }

    /// Overwrite a cell. Only the game's move applicator mutates boards.
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[x * self.size + y] = cell;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Walk the cells of one line, starting at `(x, y)` and stepping in
    /// `direction` until the edge of the board. Empty when `(x, y)` is off
    /// the board.
    #[must_use]
    pub fn line(&self, x: i32, y: i32, direction: Direction) -> Line<'_> {
        let (dx, dy) = direction.delta();
        Line {
            board: self,
            x,
            y,
            dx,
            dy,
        }
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// No empty cell left?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Copy with the two players' stones exchanged.
    #[must_use]
    pub fn swapped(&self) -> Board {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|cell| cell.swapped()).collect(),
        }
    }
}

/// Iterator over the cells of one board line. See [`Board::line`].
#[derive(Clone, Debug)]
pub struct Line<'a> {
    board: &'a Board,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Iterator for Line<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let cell = self.board.cell(self.x, self.y)?;
        self.x += self.dx;
        self.y += self.dy;
        Some(cell)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the `Display` format: one row per line, `.`/`X`/`O` per cell.
/// Whitespace inside a row is ignored, blank lines are skipped.
impl FromStr for Board {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_idx, line) in s.lines().enumerate() {
            let line_no = line_idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Cell::from_symbol(c).ok_or_else(|| GomokuError::Parse {
                        line: line_no,
                        reason: format!("unexpected character {:?}", c),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(GomokuError::Parse {
                        line: line_no,
                        reason: format!("expected {} cells, found {}", first.len(), row.len()),
                    });
                }
            }
            rows.push(row);
        }

        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        if rows[0].len() != size {
            return Err(GomokuError::Parse {
                line: 1,
                reason: format!("board must be square: {} rows of {} cells", size, rows[0].len()),
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
