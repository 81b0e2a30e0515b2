use std::collections::VecDeque;

use super::Scene;
use crate::InputSource;
use crate::board::{ParseSquareError, Square};
use crate::moves::Piece;

/// A scriptable input source that replays activation scripts.
///
/// Holds the scene roster and a queue of pending activations. New
/// script can be appended at any time for interactive use; a parse
/// error leaves already-queued activations untouched.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    scene: Scene,
    pending: VecDeque<Square>,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedInput {
    /// Creates an input source over the standard starting scene.
    pub fn new() -> Self {
        Self::with_scene(Scene::starting())
    }

    /// Creates an input source over a specific scene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            pending: VecDeque::new(),
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Parse and queue additional script.
    ///
    /// Format: whitespace-separated algebraic squares, one activation
    /// each. Example: `"d2 b1 d2"` activates the piece on d2, then
    /// b1, then d2 again.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseSquareError> {
        let squares = script
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Square>, _>>()?;
        self.pending.extend(squares);
        Ok(())
    }

    /// Replay all pending activations, calling the callback for each.
    pub fn drain<F>(&mut self, mut on_activation: F)
    where
        F: FnMut(Piece),
    {
        while let Some(piece) = self.poll_activation() {
            on_activation(piece);
        }
    }
}

impl InputSource for ScriptedInput {
    /// Pops queued squares until one resolves to a piece in the scene.
    ///
    /// A gesture on an empty tile produces no activation in a live
    /// host (the hit test finds no piece collider), so empty squares
    /// are skipped here too.
    fn poll_activation(&mut self) -> Option<Piece> {
        while let Some(square) = self.pending.pop_front() {
            match self.scene.piece_at(square) {
                Some(piece) => return Some(piece),
                None => log::debug!("no piece at {square}, activation skipped"),
            }
        }
        None
    }
}
