use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A board coordinate as (row, column). Row 0 is the top, row `ROWS - 1`
/// the bottom.
pub type Coord = (usize, usize);

/// Scan directions for four-in-a-row detection, as (row step, column step):
/// horizontal, vertical, diagonal down-right, diagonal down-left
/// (anti-diagonal, stepping up-right). The order decides which line
/// `winning_line` reports when several exist at once.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("invalid column")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column can accept another piece. A column whose top cell
    /// is occupied is full. Out-of-range columns are never open.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Find the lowest empty row in a column, scanning bottom to top.
    /// Returns `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Place a piece at an exact position. This is the only mutation point.
    ///
    /// The caller must have obtained `row` from [`next_open_row`] so pieces
    /// stack without gaps; violating that is a caller bug, not a runtime
    /// condition. Use [`drop_piece`] for the validated path.
    ///
    /// [`next_open_row`]: Board::next_open_row
    /// [`drop_piece`]: Board::drop_piece
    pub fn place_piece(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(row < ROWS && col < COLS);
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        debug_assert!(
            row == ROWS - 1 || self.cells[row + 1][col] != Cell::Empty,
            "pieces must stack from the bottom up"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull)?;
        self.place_piece(row, col, player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_open(col))
    }

    /// Check if the game is a draw. Meaningful only after a win check:
    /// a full board holding a four-in-a-row is a win, not a draw.
    pub fn is_draw(&self) -> bool {
        self.is_full()
    }

    /// Check whether the player has four in a row along any orientation.
    pub fn has_connect_four(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Find the player's first four-in-a-row, as the four coordinates in
    /// step order, or `None`.
    ///
    /// Orientations are scanned horizontal, then vertical, then diagonal
    /// down-right, then diagonal down-left; within an orientation, earlier
    /// columns win ties, then earlier rows.
    pub fn winning_line(&self, player: Player) -> Option<[Coord; 4]> {
        let target = player.to_cell();

        for &(dr, dc) in &DIRECTIONS {
            // Start positions from which a window of 4 stays in bounds.
            let cols = if dc == 0 { 0..COLS } else { 0..COLS - 3 };
            for col in cols {
                let rows = match dr {
                    0 => 0..ROWS,
                    1 => 0..ROWS - 3,
                    _ => 3..ROWS,
                };
                'window: for row in rows {
                    let mut line = [(0, 0); 4];
                    for (i, slot) in line.iter_mut().enumerate() {
                        let r = (row as isize + dr * i as isize) as usize;
                        let c = (col as isize + dc * i as isize) as usize;
                        if self.cells[r][c] != target {
                            continue 'window;
                        }
                        *slot = (r, c);
                    }
                    return Some(line);
                }
            }
        }

        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
