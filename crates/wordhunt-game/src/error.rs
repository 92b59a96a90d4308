/// Errors returned by game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A cell coordinate lies outside the grid.
    #[display("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        size: usize,
    },
    /// The puzzle is already solved; the session accepts no further input.
    #[display("puzzle already completed")]
    AlreadyCompleted,
    /// No hints are left in this session.
    #[display("no hints remaining")]
    NoHintsRemaining,
}
