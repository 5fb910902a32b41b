//! Core data structures

/// Packed module matrix
pub mod grid;
/// Mode switch and its transitions
pub mod mode;
/// Frame coordinates
pub mod point;
/// Rendered symbols and their style
pub mod symbol;
/// What the surfaces display
pub mod view_state;

pub use grid::ModuleGrid;
pub use mode::{Mode, Transition};
pub use point::Point;
pub use symbol::{EcLevel, Rgb, Symbol, SymbolStyle};
pub use view_state::ViewState;
