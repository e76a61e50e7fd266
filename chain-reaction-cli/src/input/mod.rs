//! Input handling module

pub mod csv_reader;
pub mod glob_resolver;

pub use csv_reader::CsvReader;
pub use glob_resolver::resolve_patterns;
