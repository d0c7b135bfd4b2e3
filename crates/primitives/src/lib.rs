//! Core types for modal editing: positions, selections, text sources, and the
//! directional traversal engine every motion is built on.

/// Character classification for motions and object selection.
pub mod charset;
/// Traversal orientation.
pub mod direction;
/// Boxed future aliases.
pub mod future;
/// Directional traversal over a text source.
pub mod movement;
/// Line/column document coordinates.
pub mod position;
/// Anchor/active selection pairs.
pub mod selection;
/// Read-only line-addressed text access.
pub mod text;

pub use charset::CharSet;
pub use direction::Direction;
pub use future::BoxFutureLocal;
pub use movement::{CharCode, Traversal};
pub use position::Position;
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
pub use text::TextSource;
