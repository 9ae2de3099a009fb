use crate::board::Board;
use crate::types::{Kind, Position, Side};

const ADJACENT: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Returns the destinations of the piece on `pos` in generation order.
/// Empty when `pos` is empty or holds a piece of the side not to move.
pub fn legal_moves(board: &Board, pos: Position, to_move: Side) -> Vec<Position> {
    let Some(piece) = board.get(pos) else {
        return Vec::new();
    };
    if piece.side != to_move {
        return Vec::new();
    }

    let side = piece.side;
    match piece.kind {
        Kind::King => step_moves(board, pos, side, &ADJACENT),
        Kind::Knight => step_moves(board, pos, side, &KNIGHT_OFFSETS),
        Kind::Rook => slide_moves(board, pos, side, &ROOK_DIRECTIONS),
        Kind::Bishop => slide_moves(board, pos, side, &BISHOP_DIRECTIONS),
        Kind::Queen => {
            let mut moves = slide_moves(board, pos, side, &ROOK_DIRECTIONS);
            moves.extend(slide_moves(board, pos, side, &BISHOP_DIRECTIONS));
            moves
        }
        Kind::Pawn => pawn_moves(board, pos, side),
        Kind::Pope => pope_moves(board, pos, side),
    }
}

/// True when `target` is empty or holds an enemy of `side`.
fn can_land(board: &Board, target: Position, side: Side) -> bool {
    board.get(target).is_none_or(|p| p.side != side)
}

fn is_enemy(board: &Board, target: Position, side: Side) -> bool {
    board.get(target).is_some_and(|p| p.side != side)
}

fn step_moves(
    board: &Board,
    from: Position,
    side: Side,
    offsets: &[(i32, i32)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| can_land(board, to, side))
        .collect()
}

fn slide_moves(
    board: &Board,
    from: Position,
    side: Side,
    directions: &[(i32, i32)],
) -> Vec<Position> {
    let mut moves = Vec::new();

    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.get(next) {
                None => moves.push(next),
                Some(blocker) => {
                    if blocker.side != side {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

fn pawn_moves(board: &Board, from: Position, side: Side) -> Vec<Position> {
    let dir = side.forward();
    let mut moves = Vec::new();

    if let Some(one) = from.offset(dir, 0)
        && board.is_empty(one)
    {
        moves.push(one);
        if from.row == side.pawn_start_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.is_empty(two)
        {
            moves.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc)
            && is_enemy(board, diag, side)
        {
            moves.push(diag);
        }
    }

    moves
}

/// With any neighbour present the Pope only jumps: over each adjacent ally,
/// then each adjacent enemy, onto the empty square directly beyond it. The
/// jumped piece stays where it is. With no neighbours it steps like a King.
fn pope_moves(board: &Board, from: Position, side: Side) -> Vec<Position> {
    let neighbours: Vec<((i32, i32), Side)> = ADJACENT
        .iter()
        .filter_map(|&(dr, dc)| {
            let adjacent = from.offset(dr, dc)?;
            board.get(adjacent).map(|p| ((dr, dc), p.side))
        })
        .collect();

    if neighbours.is_empty() {
        return step_moves(board, from, side, &ADJACENT);
    }

    let allies = neighbours.iter().filter(|(_, s)| *s == side);
    let enemies = neighbours.iter().filter(|(_, s)| *s != side);

    allies
        .chain(enemies)
        .filter_map(|&((dr, dc), _)| from.offset(2 * dr, 2 * dc))
        .filter(|&landing| board.is_empty(landing))
        .collect()
}
