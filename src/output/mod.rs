//! Terminal output formatting
//!
//! Colored tiles, round summaries and command reports.

pub mod display;
pub mod formatters;

pub use display::{
    INSTRUCTIONS, print_check_report, print_score_result, write_board, write_instructions,
    write_outcome, write_statistics,
};
