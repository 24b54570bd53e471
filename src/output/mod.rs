pub mod formatter;

pub use formatter::{
    format_bank, format_elapsed, format_report, format_score, score_bar, should_use_colors,
};
