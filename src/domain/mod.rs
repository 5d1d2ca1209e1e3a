mod cell;
mod config;
mod grid;

pub use cell::Cell;
pub use config::BoardConfig;
pub use grid::Grid;
