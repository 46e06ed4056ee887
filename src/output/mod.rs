//! Terminal output formatting
//!
//! Coloured boards and keyboards for the line-based front-ends.

pub mod display;
pub mod formatters;

pub use display::{board_lines, keyboard_lines, print_board, print_outcome, ruled_out_line};
pub use formatters::legend;
