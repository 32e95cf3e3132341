//! Shared value types for glstate.
//!
//! These are the plain types that callers of the render-state cache already
//! carry around: packed palette colors and fixed-point plane equations. They
//! have no dependency on the graphics device and can be shared across crates
//! without pulling in the cache itself.

pub mod color;
pub mod math;

pub use color::PalEntry;
pub use math::{FRACUNIT, Fixed, SecPlane, fixed_to_float};
