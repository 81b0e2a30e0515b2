pub mod input;
pub mod renderer;
pub mod scene;

pub use input::ScriptedInput;
pub use renderer::MockRenderer;
pub use scene::Scene;
