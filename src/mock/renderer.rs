use std::convert::Infallible;

use crate::board::Square;
use crate::{BoardRenderer, MarkerColor};

/// Mock renderer for tests and development on hosts without a scene.
///
/// Records every marker in placement order so tests can assert both
/// the highlight set and the deterministic order it was produced in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockRenderer {
    markers: Vec<(Square, MarkerColor)>,
}

impl MockRenderer {
    /// Creates a renderer with no markers placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Squares with at least one marker, in placement order.
    pub fn highlighted(&self) -> Vec<Square> {
        let mut squares = Vec::new();
        for &(square, _) in &self.markers {
            if !squares.contains(&square) {
                squares.push(square);
            }
        }
        squares
    }

    /// All markers currently on one tile, in placement order.
    pub fn markers_on(&self, square: Square) -> Vec<MarkerColor> {
        self.markers
            .iter()
            .filter(|(sq, _)| *sq == square)
            .map(|(_, color)| *color)
            .collect()
    }

    /// True when no tile carries a marker.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.markers.is_empty()
    }
}

impl BoardRenderer for MockRenderer {
    type TileHandle = Square;
    type Error = Infallible;

    fn highlight(&mut self, square: Square, color: MarkerColor) -> Result<(), Self::Error> {
        self.markers.push((square, color));
        Ok(())
    }

    fn clear_markers(&mut self, square: Square) -> Result<(), Self::Error> {
        self.markers.retain(|(sq, _)| *sq != square);
        Ok(())
    }

    fn resolve_tile(&self, square: Square) -> Result<Self::TileHandle, Self::Error> {
        Ok(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        notation.parse().expect("test square should be valid")
    }

    #[test]
    fn test_mock_renderer_clear_on_creation() {
        let renderer = MockRenderer::new();
        assert!(renderer.is_clear());
        assert!(renderer.highlighted().is_empty());
    }

    #[test]
    fn test_markers_accumulate_on_one_tile() {
        let mut renderer = MockRenderer::new();
        renderer.highlight(sq("d4"), MarkerColor::Green).unwrap();
        renderer.highlight(sq("d4"), MarkerColor::Red).unwrap();

        assert_eq!(
            renderer.markers_on(sq("d4")),
            vec![MarkerColor::Green, MarkerColor::Red]
        );
        assert_eq!(renderer.highlighted(), vec![sq("d4")]);
    }

    #[test]
    fn test_clear_markers_affects_only_that_tile() {
        let mut renderer = MockRenderer::new();
        renderer.highlight(sq("d4"), MarkerColor::Green).unwrap();
        renderer.highlight(sq("e5"), MarkerColor::Green).unwrap();

        renderer.clear_markers(sq("d4")).unwrap();

        assert!(renderer.markers_on(sq("d4")).is_empty());
        assert_eq!(renderer.highlighted(), vec![sq("e5")]);
    }

    #[test]
    fn test_clear_markers_on_clear_tile_is_noop() {
        let mut renderer = MockRenderer::new();
        renderer.clear_markers(sq("a1")).unwrap();
        assert!(renderer.is_clear());
    }

    #[test]
    fn test_resolve_tile_returns_square_handle() {
        let renderer = MockRenderer::new();
        assert_eq!(renderer.resolve_tile(sq("h8")), Ok(sq("h8")));
    }
}
