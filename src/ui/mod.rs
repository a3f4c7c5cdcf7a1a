pub mod layout;
pub mod renderer;
mod terminal;

pub use terminal::run_ui;
