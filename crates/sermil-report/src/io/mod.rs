//! Input readers for the yearly SERMIL dumps.
pub mod sermil_csv;

pub use sermil_csv::{
    load_year, load_years, read_sermil_csv, year_file_path, LoadError, LoadErrorKind,
    SermilReaderConfig, SermilRecord, YearTable,
};
