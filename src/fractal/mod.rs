//! Iterated function systems: affine map tables, the classic presets, and
//! the chaos-game renderer.

pub mod chaos;
pub mod maps;
pub mod presets;

pub use chaos::{render, render_default};
pub use maps::{AffineMap, Ifs};
