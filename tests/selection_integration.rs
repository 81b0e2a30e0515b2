use move_preview::board::{Board, Square};
use move_preview::mock::{MockRenderer, Scene, ScriptedInput};
use move_preview::moves::{Piece, PieceColor, PieceKind};
use move_preview::selection::SelectionController;

/// Helper: parse an algebraic square.
fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}

/// Helper: parse a list of algebraic squares.
fn squares(notations: &[&str]) -> Vec<Square> {
    notations.iter().map(|s| sq(s)).collect()
}

/// Helper: controller over the initial board with a recording renderer.
fn setup(board: &Board) -> SelectionController<'_, MockRenderer> {
    SelectionController::new(board, MockRenderer::new())
}

// ---------------------------------------------------------------
// Concrete scenarios: exact highlight sets on the initial layout
// ---------------------------------------------------------------

#[test]
fn rook_at_d4_highlights_rays_up_to_occupied_ranks() {
    let board = Board::initial();
    let mut controller = setup(&board);

    // A rook conceptually placed at (3,3); the occupancy grid still
    // holds only the initial layout.
    controller.activate(Piece {
        square: sq("d4"),
        kind: PieceKind::Rook,
        color: PieceColor::White,
    });

    // Direction-by-direction order: down, up, left, right; each ray
    // stops short of the occupied outer rank-pairs.
    assert_eq!(
        controller.renderer().highlighted(),
        squares(&["d3", "d5", "d6", "c4", "b4", "a4", "e4", "f4", "g4", "h4"])
    );
}

#[test]
fn knight_at_b1_highlights_exactly_two_squares() {
    let board = Board::initial();
    let scene = Scene::starting();
    let mut controller = setup(&board);

    let knight = scene.piece_at(sq("b1")).expect("knight on b1");
    assert_eq!(knight.kind, PieceKind::Knight);

    controller.activate(knight);

    // The other six offsets land off-board or on occupied squares.
    assert_eq!(controller.renderer().highlighted(), squares(&["c3", "a3"]));
}

#[test]
fn pawn_at_d2_highlights_one_and_two_steps() {
    let board = Board::initial();
    let scene = Scene::starting();
    let mut controller = setup(&board);

    let pawn = scene.piece_at(sq("d2")).expect("pawn on d2");
    controller.activate(pawn);

    assert_eq!(controller.renderer().highlighted(), squares(&["d3", "d4"]));
}

#[test]
fn queen_at_d4_highlights_rook_then_bishop_rays() {
    let board = Board::initial();
    let mut controller = setup(&board);

    controller.activate(Piece {
        square: sq("d4"),
        kind: PieceKind::Queen,
        color: PieceColor::Black,
    });

    assert_eq!(
        controller.renderer().highlighted(),
        squares(&[
            "d3", "d5", "d6", "c4", "b4", "a4", "e4", "f4", "g4", "h4", // rook rays
            "c3", "c5", "b6", "e3", "e5", "f6", // bishop rays
        ])
    );
}

// ---------------------------------------------------------------
// Selection toggle
// ---------------------------------------------------------------

#[test]
fn activating_same_piece_twice_returns_to_idle() {
    let board = Board::initial();
    let scene = Scene::starting();
    let mut controller = setup(&board);
    let pawn = scene.piece_at(sq("e2")).expect("pawn on e2");

    controller.activate(pawn);
    assert!(controller.selected().is_some());

    controller.activate(pawn);
    assert_eq!(controller.selected(), None);
    assert!(controller.renderer().is_clear());
}

#[test]
fn switching_pieces_clears_previous_highlights_first() {
    let board = Board::initial();
    let scene = Scene::starting();
    let mut controller = setup(&board);

    let pawn = scene.piece_at(sq("d2")).expect("pawn on d2");
    let knight = scene.piece_at(sq("g1")).expect("knight on g1");

    controller.activate(pawn);
    controller.activate(knight);

    assert_eq!(controller.selected(), Some(knight));
    for square in ["d3", "d4"] {
        assert!(
            controller.renderer().markers_on(sq(square)).is_empty(),
            "pawn highlight on {square} should be cleared"
        );
    }
    assert_eq!(controller.renderer().highlighted(), squares(&["h3", "f3"]));
}

// ---------------------------------------------------------------
// Scripted input driving the controller end-to-end
// ---------------------------------------------------------------

#[test]
fn scripted_select_switch_deselect_ends_idle() {
    let board = Board::initial();
    let mut controller = setup(&board);
    let mut input = ScriptedInput::new();

    // Select the d2 pawn, switch to the b1 knight, deselect it.
    input.push_script("d2 b1 b1").expect("valid script");
    input.drain(|piece| controller.activate(piece));

    assert_eq!(controller.selected(), None);
    assert!(controller.renderer().is_clear());
}

#[test]
fn scripted_activation_on_empty_square_is_ignored() {
    let board = Board::initial();
    let mut controller = setup(&board);
    let mut input = ScriptedInput::new();

    // d5 is empty; only the e7 pawn activation goes through.
    input.push_script("d5 e7").expect("valid script");
    input.drain(|piece| controller.activate(piece));

    assert_eq!(
        controller.selected().map(|p| p.square),
        Some(sq("e7")),
        "only the occupied square should activate"
    );
    assert_eq!(controller.renderer().highlighted(), squares(&["e6", "e5"]));
}

// ---------------------------------------------------------------
// Degraded paths
// ---------------------------------------------------------------

#[test]
fn stray_pawn_selects_with_no_highlights() {
    let board = Board::initial();
    let mut scene = Scene::new();
    let stray_pawn = Piece {
        square: sq("d4"),
        kind: PieceKind::Pawn,
        color: PieceColor::White,
    };
    scene.place(stray_pawn);

    let mut controller = setup(&board);
    let mut input = ScriptedInput::with_scene(scene);
    input.push_script("d4").expect("valid script");
    input.drain(|piece| controller.activate(piece));

    // Generation aborts on the invalid starting row, but the
    // selection transition still happens and nothing is drawn.
    assert_eq!(controller.selected(), Some(stray_pawn));
    assert!(controller.renderer().is_clear());
}

#[test]
fn interaction_continues_after_failed_generation() {
    let board = Board::initial();
    let mut scene = Scene::starting();
    scene.place(Piece {
        square: sq("d4"),
        kind: PieceKind::Pawn,
        color: PieceColor::White,
    });

    let mut controller = setup(&board);
    let mut input = ScriptedInput::with_scene(scene);
    input.push_script("d4 b1").expect("valid script");
    input.drain(|piece| controller.activate(piece));

    // The stray pawn degraded to no highlights; the next activation
    // still renders normally.
    assert_eq!(controller.selected().map(|p| p.kind), Some(PieceKind::Knight));
    assert_eq!(controller.renderer().highlighted(), squares(&["c3", "a3"]));
}
