use crate::board::Board;
use crate::movegen;
use crate::types::{GameView, Piece, Position, SelectOutcome, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Idle,
    Selected {
        square: Position,
        valid_moves: Vec<Position>,
    },
}

/// One game session: board, side to move and the current selection.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Side,
    selection: Selection,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::new(), Side::White)
    }

    /// Starts from an arbitrary position with `to_move` to play.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        Self {
            board,
            current_player: to_move,
            selection: Selection::Idle,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Side {
        self.current_player
    }

    pub fn status(&self) -> String {
        match self.current_player {
            Side::White => "White to move".to_string(),
            Side::Black => "Black to move".to_string(),
        }
    }

    pub fn selected(&self) -> Option<Position> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Cached destinations of the selected piece; empty when idle.
    pub fn valid_moves(&self) -> &[Position] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { valid_moves, .. } => valid_moves,
        }
    }

    /// Destinations of the piece on `pos` for the side to move.
    pub fn legal_moves(&self, pos: Position) -> Vec<Position> {
        movegen::legal_moves(&self.board, pos, self.current_player)
    }

    /// Handles a click on `pos`.
    ///
    /// A click on a cached destination plays the move and passes the turn.
    /// Otherwise a click on an own piece (re)selects it and anything else
    /// clears the selection.
    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        if let Selection::Selected {
            square,
            valid_moves,
        } = &self.selection
            && valid_moves.contains(&pos)
        {
            let from = *square;
            let captured = self.play(from, pos);
            return SelectOutcome::Moved {
                from,
                to: pos,
                captured,
            };
        }

        match self.board.get(pos) {
            Some(piece) if piece.side == self.current_player => {
                let moves = self.legal_moves(pos);
                self.selection = Selection::Selected {
                    square: pos,
                    valid_moves: moves.clone(),
                };
                SelectOutcome::Selected { from: pos, moves }
            }
            _ => {
                self.selection = Selection::Idle;
                SelectOutcome::Cleared
            }
        }
    }

    pub fn snapshot(&self) -> GameView {
        GameView {
            board: self.board.snapshot(),
            current_player: self.current_player,
            selected: self.selected(),
            valid_moves: self.valid_moves().to_vec(),
        }
    }

    fn play(&mut self, from: Position, to: Position) -> Option<Piece> {
        debug_assert!(self.board.get(from).is_some(), "no piece on {from:?}");
        let captured = self.board.apply_move(from, to);
        self.selection = Selection::Idle;
        self.current_player = self.current_player.opponent();
        captured
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.selection = Selection::Idle;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
