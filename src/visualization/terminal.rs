use std::io::{self, Write};

use crate::board::{BOARD_SIZE, Board, Square};
use crate::mock::Scene;
use crate::moves::{Piece, PieceColor, PieceKind};
use crate::selection::SelectionController;
use crate::{BoardRenderer, MarkerColor};

/// Error type for terminal rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Terminal-based board renderer for development and testing.
///
/// Tracks markers per tile and renders the scene as an 8×8 grid with
/// ANSI color-coded backgrounds on highlighted squares.
#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer {
    markers: Vec<(Square, MarkerColor)>,
}

impl TerminalRenderer {
    /// Creates a renderer with no markers placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// First marker on a tile, if any; later markers on the same tile
    /// sit underneath and are not visible in a terminal cell.
    pub fn marker_at(&self, square: Square) -> Option<MarkerColor> {
        self.markers
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, color)| *color)
    }
}

impl BoardRenderer for TerminalRenderer {
    /// 0-based (line, column) of the tile's cell within the drawn
    /// board frame; line 0 is the top rank.
    type TileHandle = (u16, u16);
    type Error = TerminalError;

    fn highlight(&mut self, square: Square, color: MarkerColor) -> Result<(), Self::Error> {
        self.markers.push((square, color));
        Ok(())
    }

    fn clear_markers(&mut self, square: Square) -> Result<(), Self::Error> {
        self.markers.retain(|(sq, _)| *sq != square);
        Ok(())
    }

    fn resolve_tile(&self, square: Square) -> Result<Self::TileHandle, Self::Error> {
        let line = (BOARD_SIZE - 1 - square.row()) as u16;
        let column = square.col() as u16 * 3;
        Ok((line, column))
    }
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal interface for the move-preview demo.
///
/// Activates pieces by square, drawing the scene and the current
/// highlight markers after each command.
pub fn run_interactive_terminal(board: &Board, scene: Scene) {
    let mut controller = SelectionController::new(board, TerminalRenderer::new());

    clear_screen();
    draw_interface(&scene, &controller);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        if let Err(e) = io::stdin().read_line(&mut input) {
            eprintln!("Failed to read input: {}", e);
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "s" => {
                if parts.len() < 2 {
                    println!("Usage: s <square>");
                } else {
                    match parts[1].parse::<Square>() {
                        Ok(square) => match scene.piece_at(square) {
                            Some(piece) => {
                                controller.activate(piece);
                                clear_screen();
                                draw_interface(&scene, &controller);
                            }
                            None => println!("No piece at {square}"),
                        },
                        Err(e) => println!("Invalid square: {}", e),
                    }
                }
            }
            "demo" => {
                controller.run_self_test(|kind, renderer| {
                    clear_screen();
                    if let Err(e) = render_board(&mut io::stdout(), &scene, renderer) {
                        eprintln!("Failed to draw board: {}", e);
                    }
                    println!("\n{kind:?} pattern — press Enter to continue");
                    let mut pause = String::new();
                    let _ = io::stdin().read_line(&mut pause);
                });
                clear_screen();
                draw_interface(&scene, &controller);
            }
            "r" => {
                controller.clear_highlights();
                controller = SelectionController::new(board, TerminalRenderer::new());
                clear_screen();
                draw_interface(&scene, &controller);
            }
            "p" => {
                clear_screen();
                draw_interface(&scene, &controller);
            }
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Draws the complete interface: help text, board, and selection line.
fn draw_interface(scene: &Scene, controller: &SelectionController<'_, TerminalRenderer>) {
    println!("♟  Move Preview");
    println!();
    println!("Commands: s <square> | demo | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = render_board(&mut io::stdout(), scene, controller.renderer()) {
        eprintln!("Failed to draw board: {}", e);
    }

    match controller.selected() {
        Some(piece) => println!("Selected: {:?} at {}", piece.kind, piece.square),
        None => println!("Selected: none"),
    }
}

/// Render the scene and markers to any writer. Extracted for
/// testability.
fn render_board(
    w: &mut impl Write,
    scene: &Scene,
    renderer: &TerminalRenderer,
) -> Result<(), TerminalError> {
    for row in (0..BOARD_SIZE).rev() {
        write!(w, " {} ", row + 1)?;
        for col in 0..BOARD_SIZE {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let cell = format_cell(scene.piece_at(square), renderer.marker_at(square));
            write!(w, "{cell}")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// One 3-wide cell: piece glyph on a marker-colored background.
fn format_cell(piece: Option<Piece>, marker: Option<MarkerColor>) -> String {
    let glyph = piece.map_or("·", piece_glyph);
    match marker {
        Some(MarkerColor::Green) => format!("\x1b[42m {glyph} \x1b[0m"),
        Some(MarkerColor::Red) => format!("\x1b[41m {glyph} \x1b[0m"),
        Some(MarkerColor::Blue) => format!("\x1b[44m {glyph} \x1b[0m"),
        None => format!(" {glyph} "),
    }
}

/// Letter glyph for a piece: uppercase White, lowercase Black.
fn piece_glyph(piece: Piece) -> &'static str {
    match (piece.kind, piece.color) {
        (PieceKind::Pawn, PieceColor::White) => "P",
        (PieceKind::Knight, PieceColor::White) => "N",
        (PieceKind::Bishop, PieceColor::White) => "B",
        (PieceKind::Rook, PieceColor::White) => "R",
        (PieceKind::Queen, PieceColor::White) => "Q",
        (PieceKind::King, PieceColor::White) => "K",
        (PieceKind::Pawn, PieceColor::Black) => "p",
        (PieceKind::Knight, PieceColor::Black) => "n",
        (PieceKind::Bishop, PieceColor::Black) => "b",
        (PieceKind::Rook, PieceColor::Black) => "r",
        (PieceKind::Queen, PieceColor::Black) => "q",
        (PieceKind::King, PieceColor::Black) => "k",
    }
}
