pub mod board;
pub mod mock;
pub mod moves;
pub mod selection;
pub mod visualization;

use board::Square;
use moves::Piece;

/// Tint applied to a highlight marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Green,
    Red,
    Blue,
}

/// Trait for placing highlight markers on board tiles.
///
/// Abstracts over the host scene (3-D tiles with instantiated marker
/// prefabs) and mock/terminal rendering, providing a uniform interface
/// for the selection controller.
pub trait BoardRenderer {
    /// Handle to a tile's visual placement.
    type TileHandle;

    /// Error type for renderer failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Draw one marker on the tile at `square`, tinted `color`.
    ///
    /// Markers accumulate on a tile until [`clear_markers`] removes
    /// them.
    ///
    /// [`clear_markers`]: BoardRenderer::clear_markers
    fn highlight(&mut self, square: Square, color: MarkerColor) -> Result<(), Self::Error>;

    /// Remove every marker from the tile at `square`.
    ///
    /// A no-op on an already-clear tile.
    fn clear_markers(&mut self, square: Square) -> Result<(), Self::Error>;

    /// Resolve the visual placement handle for `square`.
    fn resolve_tile(&self, square: Square) -> Result<Self::TileHandle, Self::Error>;
}

/// Trait for delivering piece activation events.
///
/// Abstracts over live pointer/touch hit testing and scripted inputs
/// for testing. Mirrors [`BoardRenderer`] on the input side; the
/// screen-space hit test that maps a gesture to a piece happens behind
/// this trait.
pub trait InputSource {
    /// Next pending activation, if any.
    fn poll_activation(&mut self) -> Option<Piece>;
}
