// ============================================================================
// Versioned Attribute Cells
// ============================================================================
//
// Small vector values tagged with a process-wide version stamp. Two cells
// compare equal when they carry the same stamp, so change detection is one
// integer compare no matter how large the payload is.
//
// - stamp: the global counter and the VersionStamp newtype
// - cell: StateVec<N> and its 3/4-component setters

mod cell;
mod stamp;


pub use cell::{StateVec, StateVec3, StateVec4};
pub use stamp::VersionStamp;
