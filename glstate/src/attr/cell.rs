use glam::{Vec3, Vec4};

use super::stamp::VersionStamp;

/// Versioned vector of `N` floats.
///
/// Every `set` re-stamps the cell, even when the payload is unchanged. A
/// shadow copy kept next to the device is synchronized with [`update`], which
/// reports whether a dependent device call has to run.
///
/// Equality is stamp equality: payloads are never compared.
///
/// [`update`]: StateVec::update
#[derive(Clone, Copy, Debug)]
pub struct StateVec<const N: usize> {
    values: [f32; N],
    stamp: VersionStamp,
}

/// Three-component cell (camera position)
pub type StateVec3 = StateVec<3>;

/// Four-component cell (colors, plane equations)
pub type StateVec4 = StateVec<4>;

impl<const N: usize> StateVec<N> {
    /// A never-set cell. It compares unequal to every cell that has been set.
    pub const fn new() -> Self {
        Self {
            values: [0.0; N],
            stamp: VersionStamp::NEVER,
        }
    }

    /// Copy `other` into this cell if their stamps differ.
    ///
    /// Returns true iff a copy was performed.
    #[inline]
    pub fn update(&mut self, other: &Self) -> bool {
        if self.stamp != other.stamp {
            *self = *other;
            true
        } else {
            false
        }
    }

    /// Forget the stored value; the next `update` from any set cell copies.
    pub fn invalidate(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn values(&self) -> &[f32; N] {
        &self.values
    }

    #[inline]
    pub fn stamp(&self) -> VersionStamp {
        self.stamp
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        !self.stamp.is_never()
    }

    #[inline]
    fn store(&mut self, values: [f32; N]) {
        self.values = values;
        self.stamp = VersionStamp::next();
    }
}

impl StateVec<3> {
    /// Store a position.
    ///
    /// The payload is laid out `(x, z, y)`: the map's vertical axis is `z`,
    /// the renderer's is `y`, and consumers of this cell expect the renderer
    /// convention. This is an axis convention, not a transposition bug.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.store([x, z, y]);
    }

    /// Payload as stored (already in renderer axis order)
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::from_array(self.values)
    }
}

impl StateVec<4> {
    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.store([r, g, b, a]);
    }

    pub fn set_vec4(&mut self, v: Vec4) {
        self.store(v.to_array());
    }

    pub fn as_vec4(&self) -> Vec4 {
        Vec4::from_array(self.values)
    }
}

impl<const N: usize> Default for StateVec<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for StateVec<N> {
    fn eq(&self, other: &Self) -> bool {
        self.stamp == other.stamp
    }
}

impl<const N: usize> Eq for StateVec<N> {}
