//! Fixed-point math types
//!
//! Map geometry arrives in 16.16 fixed point. These are the POD forms the
//! renderer receives; the render-state cache converts them to floats when
//! they become shader parameters.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 16.16 fixed-point value
pub type Fixed = i32;

/// Fixed-point representation of 1.0
pub const FRACUNIT: Fixed = 1 << 16;

/// Convert a 16.16 fixed-point value to `f32`
#[inline]
pub fn fixed_to_float(value: Fixed) -> f32 {
    value as f32 / FRACUNIT as f32
}

/// Sector plane equation `a*x + b*y + c*z + d = 0` in fixed point.
///
/// `ic` is the precomputed inverse of `c`, which is what the glow shader
/// consumes instead of `c` itself.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct SecPlane {
    pub a: Fixed,
    pub b: Fixed,
    pub c: Fixed,
    pub d: Fixed,
    pub ic: Fixed,
}

impl SecPlane {
    /// Horizontal plane at the given height, facing up
    pub fn floor(height: Fixed) -> Self {
        Self {
            a: 0,
            b: 0,
            c: FRACUNIT,
            d: -height,
            ic: FRACUNIT,
        }
    }

    /// Horizontal plane at the given height, facing down
    pub fn ceiling(height: Fixed) -> Self {
        Self {
            a: 0,
            b: 0,
            c: -FRACUNIT,
            d: height,
            ic: -FRACUNIT,
        }
    }

    /// Float coefficients in glow-uniform order: `[a, b, ic, d]`
    pub fn to_glow_plane(&self) -> [f32; 4] {
        [
            fixed_to_float(self.a),
            fixed_to_float(self.b),
            fixed_to_float(self.ic),
            fixed_to_float(self.d),
        ]
    }
}
