pub mod clock;
pub mod command;
pub mod editor;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod navigate;
pub mod registry;
pub mod shell;
pub mod store;
pub mod tui;

mod tui_shell;
