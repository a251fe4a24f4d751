//! Terminal front end: renders a lookup snapshot and turns keystrokes into
//! query changes.

pub mod app;
pub mod card;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
