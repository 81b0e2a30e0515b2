pub mod terminal;

pub use terminal::{TerminalRenderer, run_interactive_terminal};
