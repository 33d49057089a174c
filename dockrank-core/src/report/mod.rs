//! Docking report ingestion: table parsing and directory scanning.

pub mod scanner;
pub mod table_parser;

pub use scanner::scan_reports;
pub use table_parser::parse_score_table;
