//! Graphics device seam
//!
//! [`GraphicsDevice`] is the outbound side of the cache: one method per
//! state-change call the immediate-mode pipeline understands. The cache calls
//! each method only when the matching logical attribute actually changed.
//! Implementations are expected to forward to the real API and ignore its
//! errors; the graphics context is assumed valid for as long as the
//! [`RenderState`](crate::RenderState) that owns the device.

mod recording;
mod types;

pub use recording::{DeviceCall, RecordingDevice};
pub use types::{BlendEquation, BlendFactor, CompareFunc, Primitive, TextureMode};

use crate::shader::{Colormap, ShaderHandle};

/// Handle to a vertex buffer owned by the buffer manager.
///
/// The cache only compares and forwards handles; it never creates or
/// destroys buffers. Destroying a buffer while it is still the desired
/// binding is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexBufferId(pub u32);

/// A draw submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub first: u32,
    pub count: u32,
}

impl DrawCall {
    pub fn new(primitive: Primitive, first: u32, count: u32) -> Self {
        Self {
            primitive,
            first,
            count,
        }
    }

    pub fn triangles(first: u32, count: u32) -> Self {
        Self::new(Primitive::Triangles, first, count)
    }

    pub fn triangle_fan(first: u32, count: u32) -> Self {
        Self::new(Primitive::TriangleFan, first, count)
    }
}

/// A shader uniform write
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform<'a> {
    /// 0 = off, positive = fog mode with black fog, negative = fog mode with colored fog
    FogEnabled(i32),
    TextureMode(TextureMode),
    /// Camera position in renderer axis order
    CameraPos([f32; 3]),
    /// Light factor and light distance
    LightParms([f32; 2]),
    FogColor([f32; 4]),
    FogDensity(f32),
    DynLightColor([f32; 4]),
    GlowTopColor([f32; 4]),
    GlowBottomColor([f32; 4]),
    GlowTopPlane([f32; 4]),
    GlowBottomPlane([f32; 4]),
    Colormap(Colormap),
    WarpTime(f32),
    /// Per-kind light range ends
    LightRange([i32; 3]),
    /// Packed per-light data, one vec4 per entry
    Lights(&'a [[f32; 4]]),
}

/// Outbound immediate-mode graphics calls.
///
/// Every method corresponds one-to-one to a changed logical attribute.
pub trait GraphicsDevice {
    /// Current draw color
    fn color(&mut self, rgba: [f32; 4]);

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);

    fn blend_equation(&mut self, equation: BlendEquation);

    fn alpha_func(&mut self, func: CompareFunc, threshold: f32);

    fn set_alpha_test(&mut self, enabled: bool);

    /// Fixed-function 2D texturing enable
    fn set_texturing(&mut self, enabled: bool);

    /// Fixed-function texture combine mode
    fn texture_mode(&mut self, mode: TextureMode);

    /// Fixed-function fog enable
    fn set_fog(&mut self, enabled: bool);

    fn fog_color(&mut self, rgba: [f32; 4]);

    /// Fixed-function fog density, already scaled for the device
    fn fog_density(&mut self, density: f32);

    /// Fixed-function sphere-map texture coordinate generation
    fn sphere_map(&mut self, enabled: bool);

    /// Bind a vertex buffer, or unbind with `None`
    fn bind_vertex_buffer(&mut self, buffer: Option<VertexBufferId>);

    /// Activate a shader program, or return to fixed function with `None`
    fn use_program(&mut self, program: Option<ShaderHandle>);

    fn set_uniform(&mut self, program: ShaderHandle, uniform: Uniform<'_>);

    fn draw(&mut self, draw: &DrawCall);
}
