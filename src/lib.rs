// Domain layer - Core puzzle rules
pub mod domain;

// Application layer - Session coordination
pub mod application;

// Re-exports for convenience
pub use domain::{BoardConfig, Cell, Grid};
pub use application::Session;
