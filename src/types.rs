use serde::Serialize;

pub const BOARD_SIZE: usize = 9;

/// Player colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a pawn step. White advances toward row 0.
    pub fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    fn tag(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Pope,
}

impl Kind {
    fn tag(self) -> char {
        match self {
            Kind::King => 'k',
            Kind::Queen => 'q',
            Kind::Rook => 'r',
            Kind::Bishop => 'b',
            Kind::Knight => 'n',
            Kind::Pawn => 'p',
            Kind::Pope => 'o',
        }
    }

    fn from_tag(c: char) -> Option<Self> {
        Some(match c {
            'k' => Kind::King,
            'q' => Kind::Queen,
            'r' => Kind::Rook,
            'b' => Kind::Bishop,
            'n' => Kind::Knight,
            'p' => Kind::Pawn,
            'o' => Kind::Pope,
            _ => return None,
        })
    }
}

/// A piece is identified only by its side and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub side: Side,
    pub kind: Kind,
}

impl Piece {
    pub const fn new(side: Side, kind: Kind) -> Self {
        Self { side, kind }
    }

    /// Two-character code such as `wk` or `bo`.
    pub fn tag(self) -> String {
        [self.side.tag(), self.kind.tag()].iter().collect()
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        let side = match chars.next()? {
            'w' => Side::White,
            'b' => Side::Black,
            _ => return None,
        };
        let kind = Kind::from_tag(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(side, kind))
    }

    pub fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, Kind::King) => '♔',
            (Side::White, Kind::Queen) => '♕',
            (Side::White, Kind::Rook) => '♖',
            (Side::White, Kind::Bishop) => '♗',
            (Side::White, Kind::Knight) => '♘',
            (Side::White, Kind::Pawn) => '♙',
            (Side::Black, Kind::King) => '♚',
            (Side::Black, Kind::Queen) => '♛',
            (Side::Black, Kind::Rook) => '♜',
            (Side::Black, Kind::Bishop) => '♝',
            (Side::Black, Kind::Knight) => '♞',
            (Side::Black, Kind::Pawn) => '♟',
            (_, Kind::Pope) => '⚜',
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Caller contract: `row` and `col` are both below `BOARD_SIZE`.
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self, String> {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(format!("row/col out of range: ({row}, {col})"));
        }
        Ok(Self { row, col })
    }

    /// Square reached by stepping `(dr, dc)`, or `None` off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Read-only view of a game handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// `board[row][col]`, `None` for an empty square.
    pub board: Vec<Vec<Option<Piece>>>,
    pub current_player: Side,
    pub selected: Option<Position>,
    pub valid_moves: Vec<Position>,
}

/// Result of a square click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectOutcome {
    /// An own piece was selected; `moves` may be empty.
    Selected { from: Position, moves: Vec<Position> },
    Moved {
        from: Position,
        to: Position,
        captured: Option<Piece>,
    },
    /// No selection remains.
    Cleared,
}
