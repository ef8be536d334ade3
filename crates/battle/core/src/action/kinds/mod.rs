//! Concrete action kinds and their transition implementations.
mod combat;
mod rotate;
mod surrender;
mod swap;

pub use combat::{MoveAction, MoveError};
pub use rotate::RotateAction;
pub use surrender::{SurrenderAction, SurrenderError};
pub use swap::{SwapAction, SwapError};
