/// Default maximum number of data rows held in memory.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Default maximum number of attributes (columns).
pub const DEFAULT_MAX_COLUMNS: usize = 100;

/// Capacity bounds enforced while a dataset is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_rows: usize,
    pub max_columns: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}

impl Limits {
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }
}
