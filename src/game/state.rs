use super::board::Coord;
use super::{Board, Player};

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("invalid column")]
    InvalidColumn,
    #[error("the game is already over")]
    GameOver,
}

/// Drives one game from the first move to a win or draw: owns the board,
/// alternates turns starting with player one, and records the outcome.
/// A session is created per game and replaced on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    winning_line: Option<[Coord; 4]>,
}

impl GameSession {
    /// Create a fresh session with an empty board
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: Player::One, // Player one starts
            outcome: None,
            winning_line: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The four winning coordinates, once a player has won
    pub fn winning_line(&self) -> Option<[Coord; 4]> {
        self.winning_line
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The row the next piece in this column would land in, if any.
    pub fn preview_row(&self, col: usize) -> Option<usize> {
        if col < super::board::COLS {
            self.board.next_open_row(col)
        } else {
            None
        }
    }

    /// Drop the current player's piece in a column.
    ///
    /// On success returns the outcome the move produced: `None` while the
    /// game continues, `Some` when this move won or drew. The win check runs
    /// before the draw check, so a board filled by a winning move is a win.
    /// The turn advances only when the game continues.
    pub fn play(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board.drop_piece(column, mover).map_err(|e| match e {
            super::board::MoveError::ColumnFull => MoveError::ColumnFull,
            super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        })?;

        if let Some(line) = self.board.winning_line(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
            self.winning_line = Some(line);
        } else if self.board.is_draw() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
        }

        Ok(self.outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.current_player(), Player::One);
        assert!(!session.is_terminal());
        assert_eq!(session.outcome(), None);
        assert_eq!(session.preview_row(0), Some(5));
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new();
        assert_eq!(session.play(3), Ok(None));
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.board().get(5, 3), Cell::One);

        assert_eq!(session.play(3), Ok(None));
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().get(4, 3), Cell::Two);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut session = GameSession::new();
        for _ in 0..6 {
            session.play(0).unwrap();
        }
        assert_eq!(session.play(0), Err(MoveError::ColumnFull));
        assert_eq!(session.play(7), Err(MoveError::InvalidColumn));
        // A rejected move must not advance the turn.
        assert_eq!(session.current_player(), Player::One);
    }

    #[test]
    fn test_horizontal_win_ends_game() {
        let mut session = GameSession::new();
        // One: 0,1,2,3 along the bottom; Two: 0,1,2 on top.
        for col in 0..3 {
            assert_eq!(session.play(col), Ok(None)); // One
            assert_eq!(session.play(col), Ok(None)); // Two
        }
        let outcome = session.play(3).unwrap();

        assert_eq!(outcome, Some(GameOutcome::Winner(Player::One)));
        assert!(session.is_terminal());
        assert_eq!(
            session.winning_line(),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
        // The winner stays recorded as the mover.
        assert_eq!(session.current_player(), Player::One);
    }

    #[test]
    fn test_vertical_win_for_player_two() {
        let mut session = GameSession::new();
        // One scatters, Two stacks column 3.
        let moves = [0, 3, 1, 3, 0, 3, 1];
        for &col in &moves {
            assert_eq!(session.play(col), Ok(None));
        }
        let outcome = session.play(3).unwrap();

        assert_eq!(outcome, Some(GameOutcome::Winner(Player::Two)));
        assert_eq!(
            session.winning_line(),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut session = GameSession::new();
        for col in 0..3 {
            session.play(col).unwrap();
            session.play(col).unwrap();
        }
        session.play(3).unwrap();

        assert!(session.is_terminal());
        assert_eq!(session.play(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_alternating_draw_game() {
        // Column pairs (0,1), (2,3), (4,5) are filled with complementary
        // two-piece blocks, then column 6 alternates; every move lands on
        // its own color and the final board has no four-in-a-row.
        let pair = |a: usize, b: usize| [a, b, a, b, b, a, b, a, a, b, a, b];
        let mut moves = Vec::new();
        moves.extend(pair(0, 1));
        moves.extend(pair(2, 3));
        moves.extend(pair(4, 5));
        moves.extend([6; 6]);
        assert_eq!(moves.len(), 42);

        let mut session = GameSession::new();
        let (last, rest) = moves.split_last().unwrap();
        for &col in rest {
            assert_eq!(session.play(col), Ok(None), "game ended early at {col}");
        }
        assert_eq!(session.play(*last), Ok(Some(GameOutcome::Draw)));

        assert!(session.is_terminal());
        assert_eq!(session.winning_line(), None);
        assert!(session.board().is_draw());
    }
}
