//! Parsing and alignment of benchmark result files.

pub mod parse;
pub mod record;

pub use parse::parse_results_file;
pub use record::AlignedResults;
