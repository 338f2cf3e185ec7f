pub mod formatter;

pub use formatter::{
    format_breakdown, format_ranking_table, format_recommendation, format_score, format_tsv,
    should_use_colors,
};
