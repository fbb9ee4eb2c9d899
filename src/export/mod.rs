mod csv;

pub use self::csv::{to_csv, write_csv, CSV_HEADER, DEFAULT_EXPORT_FILE};
