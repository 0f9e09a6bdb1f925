//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Nothing here caches state;
//! every call rescans the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, line_owner, winning_marker};
