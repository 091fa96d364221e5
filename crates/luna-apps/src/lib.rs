//! Content views for the Luna desktop shell
//!
//! Every window shows one content view, selected by the window's content
//! id through [`resolve`]. The window manager treats that id as an opaque
//! tag; this crate gives it meaning:
//!
//! - [`pages`]: Static portfolio pages as structured data
//! - [`TicTacToe`]: Two-player noughts and crosses
//! - [`Terminal`]: Toy shell over an in-memory filesystem
//! - [`DontOpen`]: Prank "hacker" screen
//!
//! Views are logic and view-model only; markup belongs to the host.

pub mod pages;
pub mod terminal;

mod content;
mod dont_open;
mod error;
mod tictactoe;

pub use content::{known_ids, resolve, ContentView};
pub use dont_open::{DontOpen, BANNER, HACKED_MESSAGE, LOG_LIMIT};
pub use error::{AppError, AppResult};
pub use pages::{Block, Page};
pub use terminal::{Clock, HistoryEntry, LocalClock, Terminal};
pub use tictactoe::{Mark, TicTacToe};
