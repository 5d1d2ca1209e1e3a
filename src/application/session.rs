use crate::domain::{BoardConfig, Grid};

/// Session orchestrates a single game from start to solved.
/// This is the application layer the presentation collaborator talks
/// to: it feeds selected coordinates in and reads the current grid and
/// win flag back out.
pub struct Session {
    grid: Grid,
}

impl Session {
    /// Start a new session with a randomized board
    pub fn new(config: BoardConfig) -> Self {
        Self {
            grid: Grid::random(&config),
        }
    }

    /// Start a session from a pre-built grid (deterministic starts)
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Read-only view of the current board snapshot
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Check whether the player has won
    pub fn is_won(&self) -> bool {
        self.grid.is_solved()
    }

    /// Apply a player-selected cell coordinate, replacing the current
    /// snapshot. Once the board is solved the session is over and
    /// further selections are ignored. Returns whether the move was
    /// applied.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        if self.is_won() {
            return false;
        }

        self.grid = self.grid.apply_toggle(row, col);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_new_session_uses_config_dimensions() {
        let session = Session::new(BoardConfig::new(4, 6));
        assert_eq!(session.grid().dimensions(), (4, 6));
    }

    #[test]
    fn test_select_replaces_snapshot() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 2, Cell::Lit);
        let mut session = Session::with_grid(grid);

        assert!(!session.is_won());
        assert!(session.select(1, 1));
        assert_eq!(session.grid().lit_count(), 6);
    }

    #[test]
    fn test_solving_move_wins() {
        let grid = Grid::new(3, 3).apply_toggle(1, 1);
        let mut session = Session::with_grid(grid);

        assert!(session.select(1, 1));
        assert!(session.is_won());
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut session = Session::with_grid(Grid::new(3, 3));
        assert!(session.is_won());

        // Solved sessions must stay solved
        assert!(!session.select(1, 1));
        assert!(session.is_won());
        assert_eq!(session.grid().lit_count(), 0);
    }
}
