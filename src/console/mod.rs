//! Console front end: prompts, rendering and the menu loop

pub mod display;
pub mod menu;
pub mod prompt;

pub use menu::{run_game, MenuCommand};
pub use prompt::Prompter;
