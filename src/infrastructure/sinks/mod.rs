//! Report sink implementations

mod tabular;

pub use tabular::{write_table, CsvReportSink, HEADER};
