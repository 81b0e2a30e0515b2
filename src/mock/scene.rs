use crate::board::Square;
use crate::moves::{Piece, PieceColor, PieceKind};

/// Back-rank arrangement from column 0 to 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece roster standing in for the host scene.
///
/// The scene owns the pieces; the core only reads them through
/// activation events. Board occupancy is tracked separately and is not
/// derived from this roster, matching the live wiring where the grid
/// and the placed pieces are initialised independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pieces: Vec<Piece>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard starting arrangement: White back rank on
    /// row 0 and pawns on row 1, Black pawns on row 6 and back rank on
    /// row 7.
    pub fn starting() -> Self {
        let mut scene = Self::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            scene.place_at(0, col, kind, PieceColor::White);
            scene.place_at(1, col, PieceKind::Pawn, PieceColor::White);
            scene.place_at(6, col, PieceKind::Pawn, PieceColor::Black);
            scene.place_at(7, col, kind, PieceColor::Black);
        }
        scene
    }

    /// Adds a piece to the scene, replacing any piece already on its
    /// square.
    pub fn place(&mut self, piece: Piece) {
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
    }

    fn place_at(&mut self, row: u8, col: u8, kind: PieceKind, color: PieceColor) {
        if let Some(square) = Square::new(row, col) {
            self.place(Piece {
                square,
                kind,
                color,
            });
        }
    }

    /// The piece sitting on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces.iter().copied().find(|p| p.square == square)
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}
