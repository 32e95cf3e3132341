//! Per-surface dynamic light data

/// Light data for one commit.
///
/// `counts` holds the cumulative end index (in lights) of each light kind,
/// so `counts[2]` is the total number of lights. `data` holds one vec4 of
/// floats per light entry and is borrowed only for the commit it is passed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightList<'a> {
    counts: [i32; 3],
    data: &'a [f32],
}

impl<'a> LightList<'a> {
    /// Wrap caller light data.
    ///
    /// Returns `None` if the counts are negative or decreasing, or if `data`
    /// holds fewer than `4 * counts[2]` floats.
    pub fn new(counts: [i32; 3], data: &'a [f32]) -> Option<Self> {
        if counts[0] < 0 || counts[1] < counts[0] || counts[2] < counts[1] {
            return None;
        }
        let needed = usize::try_from(counts[2]).ok()?.checked_mul(4)?;
        if data.len() < needed {
            return None;
        }
        Some(Self { counts, data })
    }

    /// Wrap light data that is already packed as vec4s
    pub fn from_vec4s(counts: [i32; 3], data: &'a [[f32; 4]]) -> Option<Self> {
        Self::new(counts, bytemuck::cast_slice(data))
    }

    /// An empty list
    pub fn empty() -> Self {
        Self {
            counts: [0; 3],
            data: &[],
        }
    }

    pub fn counts(&self) -> [i32; 3] {
        self.counts
    }

    /// Total number of lights
    pub fn len(&self) -> usize {
        usize::try_from(self.counts[2]).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The used part of the data, one vec4 per light
    pub fn vec4s(&self) -> &'a [[f32; 4]] {
        let data: &'a [f32] = self.data;
        let used = &data[..self.len() * 4];
        bytemuck::try_cast_slice(used).unwrap_or(&[])
    }
}

impl Default for LightList<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
