use crate::board::{Board, Square};
use thiserror::Error;

/// Piece type, determining which move pattern applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

/// A piece as seen by the core: its square plus kind and color.
///
/// Pieces are owned by the scene collaborator; the core only reads
/// them. Identity is by value. Color is carried for display but never
/// consulted by move generation — occupancy is the only gate, so an
/// occupied destination blocks regardless of which side sits there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub square: Square,
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// Error for move generation failures.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    /// Pawn generation invoked on a row other than its starting rows.
    /// Pawn direction is inferred from the starting rank, so any other
    /// row has no defined direction.
    #[error("invalid pawn starting row: {0}")]
    InvalidStartingRow(u8),
}

// Offset tables. Generation order follows these arrays so the produced
// move sets are deterministic for tests; the renderer treats them as
// unordered.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];
const LINEAR_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Destination squares for `piece` on `board`.
///
/// Pawns are always generated as if unmoved; the scene does not track
/// per-piece move history.
pub fn destinations(board: &Board, piece: Piece) -> Result<Vec<Square>, MoveError> {
    Ok(match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece.square, true)?,
        PieceKind::King => king_moves(board, piece.square),
        PieceKind::Queen => queen_moves(board, piece.square),
        PieceKind::Bishop => bishop_moves(board, piece.square),
        PieceKind::Knight => knight_moves(board, piece.square),
        PieceKind::Rook => rook_moves(board, piece.square),
    })
}

/// The 8 unit offsets around the king, each included independently.
pub fn king_moves(board: &Board, from: Square) -> Vec<Square> {
    step_moves(board, from, &KING_OFFSETS)
}

/// The 8 L-shaped knight offsets, each included independently.
pub fn knight_moves(board: &Board, from: Square) -> Vec<Square> {
    step_moves(board, from, &KNIGHT_OFFSETS)
}

/// Orthogonal rays until blocked by the board edge or an occupied
/// square; the blocking square is not included.
pub fn rook_moves(board: &Board, from: Square) -> Vec<Square> {
    ray_moves(board, from, &LINEAR_DIRECTIONS)
}

/// Diagonal rays, same stopping rule as [`rook_moves`].
pub fn bishop_moves(board: &Board, from: Square) -> Vec<Square> {
    ray_moves(board, from, &DIAGONAL_DIRECTIONS)
}

/// Union of rook and bishop rays from the same origin. The ray sets
/// are disjoint, so concatenation introduces no duplicates.
pub fn queen_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = rook_moves(board, from);
    moves.extend(bishop_moves(board, from));
    moves
}

/// Forward stepping for a pawn.
///
/// Direction is inferred from the starting rank: +1 from row 1, −1
/// otherwise. One step forward is a candidate iff unoccupied; with
/// `first_move`, a second step iff the first was also clear. Rows
/// outside {1, 6} have no inferable direction and are rejected.
pub fn pawn_moves(board: &Board, from: Square, first_move: bool) -> Result<Vec<Square>, MoveError> {
    if from.row() != 1 && from.row() != 6 {
        return Err(MoveError::InvalidStartingRow(from.row()));
    }
    let direction: i8 = if from.row() == 1 { 1 } else { -1 };

    let mut moves = Vec::new();
    if let Some(one_step) = from.offset(direction, 0)
        && !board.is_occupied(one_step)
    {
        moves.push(one_step);
        if first_move
            && let Some(two_step) = one_step.offset(direction, 0)
            && !board.is_occupied(two_step)
        {
            moves.push(two_step);
        }
    }
    Ok(moves)
}

/// Fixed-offset candidates: in-bounds and unoccupied, in table order.
fn step_moves(board: &Board, from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&square| !board.is_occupied(square))
        .collect()
}

/// Sliding candidates: walk each direction outward, stopping at the
/// edge or the first occupied square (which is excluded).
fn ray_moves(board: &Board, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if board.is_occupied(next) {
                break;
            }
            moves.push(next);
            current = next;
        }
    }
    moves
}
