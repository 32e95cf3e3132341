//! Device shadow
//!
//! What the device last received. `None` means "unknown": the next commit
//! sends the logical value unconditionally.

use hashbrown::HashMap;

use crate::attr::{StateVec3, StateVec4};
use crate::device::{BlendEquation, BlendFactor, CompareFunc, TextureMode, VertexBufferId};
use crate::shader::{Colormap, ShaderHandle};
use glstate_shared::PalEntry;

/// Store `value` into `shadow` and report whether it differed
#[inline]
pub(super) fn reconcile<T: PartialEq + Copy>(shadow: &mut Option<T>, value: T) -> bool {
    if *shadow == Some(value) {
        false
    } else {
        *shadow = Some(value);
        true
    }
}

#[derive(Debug, Default)]
pub(super) struct DeviceShadow {
    pub color: StateVec4,

    pub blend_func: Option<(BlendFactor, BlendFactor)>,
    pub blend_equation: Option<BlendEquation>,
    pub alpha_func: Option<(CompareFunc, f32)>,
    pub alpha_test: Option<bool>,

    pub vertex_buffer: Option<Option<VertexBufferId>>,
    /// Active program, `Some(None)` for fixed function
    pub program: Option<Option<ShaderHandle>>,

    pub fixed: FixedFunctionShadow,
    pub uniforms: HashMap<ShaderHandle, ProgramUniforms>,
}

impl DeviceShadow {
    /// Forget the deferred blend/alpha parameters
    pub fn invalidate_blend(&mut self) {
        self.blend_func = None;
        self.blend_equation = None;
        self.alpha_func = None;
        self.alpha_test = None;
    }
}

/// Fixed-function pipeline state
#[derive(Debug, Default)]
pub(super) struct FixedFunctionShadow {
    pub texturing: Option<bool>,
    pub texture_mode: Option<TextureMode>,
    pub fog: Option<bool>,
    pub fog_color: Option<PalEntry>,
    pub fog_density: Option<f32>,
    pub sphere_map: Option<bool>,
}

/// Uniform values one program last received
#[derive(Debug, Default)]
pub(super) struct ProgramUniforms {
    pub fog_enabled: Option<i32>,
    pub fog_color: Option<PalEntry>,
    pub fog_density: Option<f32>,
    pub texture_mode: Option<TextureMode>,
    pub light_parms: Option<[f32; 2]>,
    pub dyn_color: Option<PalEntry>,
    pub light_range: Option<[i32; 3]>,
    pub colormap: Option<Colormap>,
    pub warp_time: Option<f32>,

    pub camera_pos: StateVec3,
    pub glow_top: StateVec4,
    pub glow_bottom: StateVec4,
    pub glow_top_plane: StateVec4,
    pub glow_bottom_plane: StateVec4,
}
