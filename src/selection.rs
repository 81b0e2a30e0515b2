use crate::board::{Board, Square};
use crate::moves::{self, Piece, PieceColor, PieceKind};
use crate::{BoardRenderer, MarkerColor};

const fn square(row: u8, col: u8) -> Square {
    match Square::new(row, col) {
        Some(sq) => sq,
        None => panic!("demo square out of range"),
    }
}

/// The fixed origins shown by [`SelectionController::run_self_test`],
/// one per piece kind. Pawns demonstrate from their starting row.
const SELF_TEST_STEPS: [(PieceKind, Square); 6] = [
    (PieceKind::King, square(3, 3)),
    (PieceKind::Pawn, square(1, 3)),
    (PieceKind::Queen, square(3, 3)),
    (PieceKind::Rook, square(3, 3)),
    (PieceKind::Bishop, square(3, 3)),
    (PieceKind::Knight, square(3, 3)),
];

/// Drives highlight rendering from piece activations.
///
/// Owns the single-selection toggle: at most one piece is selected at
/// a time. Activating an unselected piece selects it and renders its
/// destination squares; re-activating the selected piece deselects;
/// activating a different piece switches the selection. Highlights are
/// cleared before every transition.
///
/// Failures from the renderer or the move generator are logged and
/// degrade to "no highlights shown"; the controller itself never
/// faults and stays responsive to the next activation.
pub struct SelectionController<'a, R: BoardRenderer> {
    board: &'a Board,
    renderer: R,
    selected: Option<Piece>,
}

impl<'a, R: BoardRenderer> SelectionController<'a, R> {
    pub fn new(board: &'a Board, renderer: R) -> Self {
        Self {
            board,
            renderer,
            selected: None,
        }
    }

    /// Currently selected piece, if any.
    #[inline]
    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Process one activation event.
    pub fn activate(&mut self, piece: Piece) {
        self.clear_highlights();

        if self.selected == Some(piece) {
            log::debug!("deselected {:?} at {}", piece.kind, piece.square);
            self.selected = None;
            return;
        }

        log::debug!("selected {:?} at {}", piece.kind, piece.square);
        self.selected = Some(piece);
        self.show_moves(piece);
    }

    /// Remove all markers from every tile on the board.
    ///
    /// Idempotent; renderer failures on individual tiles are logged
    /// and skipped.
    pub fn clear_highlights(&mut self) {
        for square in Square::all() {
            if let Err(e) = self.renderer.clear_markers(square) {
                log::warn!("failed to clear markers on {square}: {e}");
            }
        }
    }

    /// Compute and render the destination set for `piece`.
    fn show_moves(&mut self, piece: Piece) {
        let destinations = match moves::destinations(self.board, piece) {
            Ok(destinations) => destinations,
            Err(e) => {
                log::error!(
                    "cannot generate moves for {:?} at {}: {e}",
                    piece.kind,
                    piece.square
                );
                return;
            }
        };

        for square in destinations {
            if let Err(e) = self.renderer.highlight(square, MarkerColor::Green) {
                log::warn!("failed to highlight {square}: {e}");
            }
        }
    }

    /// Demonstration sequence showing each piece kind's highlight
    /// pattern from a fixed origin.
    ///
    /// `on_step` is invoked once per kind after its highlights are
    /// rendered (to draw the board, pause for input, etc.); the board
    /// is then cleared before the next kind. The current selection is
    /// untouched.
    pub fn run_self_test<F>(&mut self, mut on_step: F)
    where
        F: FnMut(PieceKind, &R),
    {
        for (kind, origin) in SELF_TEST_STEPS {
            self.clear_highlights();
            self.show_moves(Piece {
                square: origin,
                kind,
                color: PieceColor::White,
            });
            on_step(kind, &self.renderer);
        }
        self.clear_highlights();
    }
}
