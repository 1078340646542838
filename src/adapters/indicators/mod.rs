//! Indicator source adapters - where the reference table comes from.

mod csv_source;
mod static_source;

pub use csv_source::{parse_table, required_columns, CsvIndicatorSource, ELEMENT_COLUMN};
pub use static_source::StaticIndicatorSource;
