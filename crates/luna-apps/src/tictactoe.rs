//! Two-player tic-tac-toe on a 3x3 board

use serde::Serialize;

/// A player's mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Board state; cells are indexed row-major from the top-left
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TicTacToe {
    board: [Option<Mark>; 9],
    next: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            next: Mark::X,
        }
    }

    /// Cells, row-major
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.board
    }

    /// Player to move
    pub fn current_player(&self) -> Mark {
        self.next
    }

    /// Place the current player's mark at `index`
    ///
    /// Returns `false` (and changes nothing) for occupied cells,
    /// out-of-range indices, or once the game has a winner.
    pub fn play(&mut self, index: usize) -> bool {
        if self.winner().is_some() {
            return false;
        }
        match self.board.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(self.next);
                self.next = self.next.other();
                true
            }
            _ => false,
        }
    }

    /// Winning mark, if any line is complete
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.board[a]?;
            (self.board[b] == Some(mark) && self.board[c] == Some(mark)).then_some(mark)
        })
    }

    /// Board full with no winner
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.board.iter().all(Option::is_some)
    }

    /// Status line: "Winner: X", "Draw!" or "Turn: O"
    pub fn status(&self) -> String {
        match self.winner() {
            Some(mark) => format!("Winner: {}", mark),
            None if self.is_draw() => "Draw!".to_string(),
            None => format!("Turn: {}", self.next),
        }
    }

    /// Clear the board, X to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut TicTacToe, moves: &[usize]) {
        for &index in moves {
            assert!(game.play(index), "move {} rejected", index);
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut game = TicTacToe::new();
        assert_eq!(game.status(), "Turn: X");
        game.play(4);
        assert_eq!(game.status(), "Turn: O");
        assert_eq!(game.cells()[4], Some(Mark::X));
    }

    #[test]
    fn test_rejected_moves() {
        let mut game = TicTacToe::new();
        game.play(0);
        assert!(!game.play(0));
        assert!(!game.play(9));
        assert_eq!(game.current_player(), Mark::O);
    }

    #[test]
    fn test_winner_freezes_board() {
        let mut game = TicTacToe::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.status(), "Winner: X");
        assert!(!game.play(8));
    }

    #[test]
    fn test_draw() {
        let mut game = TicTacToe::new();
        // X O X / X O O / O X X
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(game.is_draw());
        assert_eq!(game.status(), "Draw!");
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut game = TicTacToe::new();
        // X O X / O X O / O X X
        play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_reset() {
        let mut game = TicTacToe::new();
        play_all(&mut game, &[0, 1]);
        game.reset();
        assert_eq!(game, TicTacToe::new());
    }
}
