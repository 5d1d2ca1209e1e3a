/// Configuration for board creation.
/// Consumed once when a new grid is generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Chance in [0, 1] that any cell starts lit
    pub start_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            start_probability: 0.25,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and the default
    /// start probability
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the chance that a cell starts lit (builder pattern)
    pub fn with_start_probability(mut self, probability: f64) -> Self {
        self.start_probability = probability;
        self
    }
}
