/// Cell represents a single light on the Lights Out board.
/// Each cell is either Lit or Unlit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Unlit,
    Lit,
}

impl Cell {
    /// Check if the cell is currently lit
    pub const fn is_lit(self) -> bool {
        matches!(self, Cell::Lit)
    }

    /// Return the inverted state. Toggling is its own inverse:
    /// applying it twice yields the original state.
    pub const fn toggled(self) -> Self {
        match self {
            Cell::Lit => Cell::Unlit,
            Cell::Unlit => Cell::Lit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lit() {
        assert!(Cell::Lit.is_lit());
        assert!(!Cell::Unlit.is_lit());
    }

    #[test]
    fn test_toggle_inverts() {
        assert_eq!(Cell::Lit.toggled(), Cell::Unlit);
        assert_eq!(Cell::Unlit.toggled(), Cell::Lit);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        assert_eq!(Cell::Lit.toggled().toggled(), Cell::Lit);
        assert_eq!(Cell::Unlit.toggled().toggled(), Cell::Unlit);
    }
}
