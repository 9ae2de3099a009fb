use std::fmt;

use crate::types::{BOARD_SIZE, Kind, Piece, Position, Side};

const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const BLACK_BACK_RANK: [Kind; BOARD_SIZE] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Pope,
    Kind::King,
    Kind::Queen,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];
const WHITE_BACK_RANK: [Kind; BOARD_SIZE] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Pope,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

/// 9x9 board, one optional piece per square, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// black back rank on row 0, black pawns on row 1,
    /// white pawns on row 7, white back rank on row 8.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            let col = col as u8;
            board.set(
                Position::new(0, col),
                Some(Piece::new(Side::Black, BLACK_BACK_RANK[col as usize])),
            );
            board.set(Position::new(1, col), Some(Piece::new(Side::Black, Kind::Pawn)));
            board.set(Position::new(7, col), Some(Piece::new(Side::White, Kind::Pawn)));
            board.set(
                Position::new(8, col),
                Some(Piece::new(Side::White, WHITE_BACK_RANK[col as usize])),
            );
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Parses nine rows of whitespace-separated tags (`wk`, `bo`, ...) or `.`.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != BOARD_SIZE {
                return Err(format!(
                    "row {row}: expected {BOARD_SIZE} squares, got {}",
                    tokens.len()
                ));
            }
            for (col, token) in tokens.into_iter().enumerate() {
                if token == "." {
                    continue;
                }
                let piece = Piece::from_tag(token)
                    .ok_or_else(|| format!("row {row}, col {col}: unknown piece tag {token:?}"))?;
                board.set(Position::new(row as u8, col as u8), Some(piece));
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Moves whatever stands on `from` to `to` without any legality check.
    /// Returns the piece that was overwritten on `to`, if any.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.squares[from.index()].take()?;
        self.squares[to.index()].replace(piece)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|piece| (Position::from_index(idx), piece)))
    }

    /// Returns the grid as `rows[row][col]`.
    pub fn snapshot(&self) -> Vec<Vec<Option<Piece>>> {
        self.squares
            .chunks(BOARD_SIZE)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints one line per row using the same tags `from_rows` reads.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(BOARD_SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or_else(|| ".".to_string(), Piece::tag))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn initial_board_matches_starting_layout() {
        let board = Board::new();
        let expected = Board::from_rows([
            "br bn bb bo bk bq bb bn br",
            "bp bp bp bp bp bp bp bp bp",
            ".  .  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .  .",
            "wp wp wp wp wp wp wp wp wp",
            "wr wn wb wq wk wo wb wn wr",
        ])
        .unwrap();

        assert_eq!(board, expected);
        assert_eq!(board.pieces().count(), 36);
    }

    #[test]
    fn each_side_starts_with_one_king() {
        let board = Board::new();
        for side in [Side::White, Side::Black] {
            let kings = board
                .pieces()
                .filter(|(_, p)| *p == Piece::new(side, Kind::King))
                .count();
            assert_eq!(kings, 1);
        }
    }

    #[test]
    fn apply_move_relocates_and_clears_origin() {
        let mut board = Board::new();

        let captured = board.apply_move(pos(7, 4), pos(5, 4));

        assert_eq!(captured, None);
        assert!(board.is_empty(pos(7, 4)));
        assert_eq!(board.get(pos(5, 4)), Some(Piece::new(Side::White, Kind::Pawn)));
    }

    #[test]
    fn apply_move_overwrites_occupant() {
        let mut board = Board::new();

        let captured = board.apply_move(pos(8, 0), pos(0, 0));

        assert_eq!(captured, Some(Piece::new(Side::Black, Kind::Rook)));
        assert_eq!(board.get(pos(0, 0)), Some(Piece::new(Side::White, Kind::Rook)));
        assert!(board.is_empty(pos(8, 0)));
        assert_eq!(board.pieces().count(), 35);
    }

    #[test]
    fn quiet_move_then_reverse_restores_board() {
        let mut board = Board::new();
        let before = board;

        board.apply_move(pos(8, 1), pos(6, 2));
        board.apply_move(pos(6, 2), pos(8, 1));

        assert_eq!(board, before);
    }

    #[test]
    fn capture_then_reverse_does_not_restore_board() {
        let mut board = Board::new();
        let before = board;

        board.apply_move(pos(7, 0), pos(1, 0));
        board.apply_move(pos(1, 0), pos(7, 0));

        assert_ne!(board, before);
        assert!(board.is_empty(pos(1, 0)));
    }

    #[test]
    fn moving_from_empty_square_changes_nothing() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(board.apply_move(pos(4, 4), pos(7, 4)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn display_output_parses_back() {
        let mut board = Board::new();
        board.apply_move(pos(8, 5), pos(6, 5));

        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        let rows: [&str; BOARD_SIZE] = rows.try_into().unwrap();

        assert_eq!(Board::from_rows(rows).unwrap(), board);
        assert_eq!(rows[6], ". . . . . wo . . .");
    }

    #[test]
    fn from_rows_reports_bad_input() {
        let mut rows = [". . . . . . . . ."; BOARD_SIZE];
        rows[2] = ". . . .";
        let err = Board::from_rows(rows).unwrap_err();
        assert!(err.contains("row 2"));

        rows[2] = ". . . . wx . . . .";
        let err = Board::from_rows(rows).unwrap_err();
        assert!(err.contains("unknown piece tag"));
    }

    #[test]
    fn snapshot_is_row_major_grid() {
        let grid = Board::new().snapshot();

        assert_eq!(grid.len(), BOARD_SIZE);
        assert!(grid.iter().all(|row| row.len() == BOARD_SIZE));
        assert_eq!(grid[0][3], Some(Piece::new(Side::Black, Kind::Pope)));
        assert_eq!(grid[8][5], Some(Piece::new(Side::White, Kind::Pope)));
        assert_eq!(grid[4][4], None);
    }
}
