/// Fatal input errors. Anything less than structural breakage (a bad date
/// cell, an empty filter result) degrades locally instead of landing here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input file missing or unreadable
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structurally unparseable (headers, encoding)
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Mandatory columns absent from the header row
    #[error("input is missing required columns {missing:?}; found headers: {found:?}")]
    MissingColumns {
        missing: Vec<&'static str>,
        found: Vec<String>,
    },
}
