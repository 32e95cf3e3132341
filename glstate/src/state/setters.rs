//! Logical-state mutators for RenderState

use glam::Vec4;

use super::RenderState;
use crate::config::StateChangeMode;
use crate::device::{
    BlendEquation, BlendFactor, CompareFunc, GraphicsDevice, TextureMode, VertexBufferId,
};
use crate::shader::{Colormap, SpecialEffect};
use glstate_shared::{PalEntry, SecPlane};

/// Blend `rgb` toward its luminance by `desat / 255`
fn desaturate(rgb: [f32; 3], desat: u8) -> [f32; 3] {
    if desat == 0 {
        return rgb;
    }
    let gray = rgb[0] * 0.3 + rgb[1] * 0.56 + rgb[2] * 0.14;
    let t = f32::from(desat) / 255.0;
    rgb.map(|c| c + (gray - c) * t)
}

impl<D: GraphicsDevice> RenderState<D> {
    // ------------------------------------------------------------------
    // Color (always immediate)
    // ------------------------------------------------------------------

    fn push_color(&mut self, r: f32, g: f32, b: f32, a: f32, desat: u8) {
        let [r, g, b] = desaturate([r, g, b], desat);
        self.color.set(r, g, b, a);
        self.device.color(*self.color.values());
        self.shadow.color.update(&self.color);
    }

    /// Set the draw color from normalized floats
    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32, desat: u8) {
        self.push_color(r, g, b, a, desat);
    }

    /// Set the draw color from a palette entry, including its alpha
    pub fn set_color_pal(&mut self, pe: PalEntry, desat: u8) {
        let [r, g, b, a] = pe.to_rgba_f32();
        self.push_color(r, g, b, a, desat);
    }

    /// Set the draw color from a palette entry with an explicit alpha
    pub fn set_color_alpha(&mut self, pe: PalEntry, alpha: f32, desat: u8) {
        let [r, g, b, _] = pe.to_rgba_f32();
        self.push_color(r, g, b, alpha, desat);
    }

    /// Opaque white
    pub fn reset_color(&mut self) {
        self.push_color(1.0, 1.0, 1.0, 1.0, 0);
    }

    // ------------------------------------------------------------------
    // Toggles
    // ------------------------------------------------------------------

    pub fn set_texture_mode(&mut self, mode: TextureMode) {
        self.texture_mode = mode;
    }

    pub fn enable_texture(&mut self, on: bool) {
        self.texture_enabled = on;
    }

    pub fn enable_fog(&mut self, on: bool) {
        self.fog_enabled = on;
    }

    pub fn set_effect(&mut self, effect: SpecialEffect) {
        self.special_effect = effect;
    }

    pub fn enable_glow(&mut self, on: bool) {
        self.glow_enabled = on;
    }

    pub fn enable_light(&mut self, on: bool) {
        self.light_enabled = on;
    }

    pub fn enable_brightmap(&mut self, on: bool) {
        self.brightmap_enabled = on;
    }

    pub fn set_2d_mode(&mut self, on: bool) {
        self.two_d = on;
    }

    // ------------------------------------------------------------------
    // Versioned vectors
    // ------------------------------------------------------------------

    /// Camera position in map coordinates (stored in renderer axis order)
    pub fn set_camera_pos(&mut self, x: f32, y: f32, z: f32) {
        self.camera_pos.set(x, y, z);
    }

    /// Glow colors. Always re-stamps, even for identical values.
    pub fn set_glow_params(&mut self, top: Vec4, bottom: Vec4) {
        self.glow_top.set_vec4(top);
        self.glow_bottom.set_vec4(bottom);
    }

    pub fn set_glow_planes(&mut self, top: &SecPlane, bottom: &SecPlane) {
        let [a, b, c, d] = top.to_glow_plane();
        self.glow_top_plane.set(a, b, c, d);
        let [a, b, c, d] = bottom.to_glow_plane();
        self.glow_bottom_plane.set(a, b, c, d);
    }

    // ------------------------------------------------------------------
    // Lighting and fog
    // ------------------------------------------------------------------

    /// Dynamic light color from normalized floats, rounded to 8 bits
    pub fn set_dyn_light(&mut self, r: f32, g: f32, b: f32) {
        self.dyn_color = PalEntry::from_rgb_f32(r, g, b);
    }

    pub fn set_dyn_light_color(&mut self, pe: PalEntry) {
        self.dyn_color = pe;
    }

    /// Fog color and density. A negative density keeps the current one.
    pub fn set_fog(&mut self, color: PalEntry, density: f32) {
        self.fog_color = color;
        if density >= 0.0 {
            self.fog_density = density;
        }
    }

    pub fn set_light_parms(&mut self, factor: f32, distance: f32) {
        self.light_parms = [factor, distance];
    }

    pub fn set_fixed_colormap(&mut self, colormap: Colormap) {
        self.colormap = colormap;
    }

    /// Vertex buffer for the next draw; bound lazily by `apply`
    pub fn set_vertex_buffer(&mut self, buffer: Option<VertexBufferId>) {
        self.vertex_buffer = buffer;
    }

    // ------------------------------------------------------------------
    // Blend / alpha test (deferred or direct)
    // ------------------------------------------------------------------

    pub fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        match self.change_mode {
            StateChangeMode::Deferred => {
                self.src_blend = src;
                self.dst_blend = dst;
            }
            StateChangeMode::Direct => self.device.blend_func(src, dst),
        }
    }

    pub fn alpha_func(&mut self, func: CompareFunc, threshold: f32) {
        match self.change_mode {
            StateChangeMode::Deferred => {
                self.alpha_func = func;
                self.alpha_threshold = threshold;
            }
            StateChangeMode::Direct => self.device.alpha_func(func, threshold),
        }
    }

    pub fn enable_alpha_test(&mut self, on: bool) {
        match self.change_mode {
            StateChangeMode::Deferred => self.alpha_test = on,
            StateChangeMode::Direct => self.device.set_alpha_test(on),
        }
    }

    pub fn blend_equation(&mut self, equation: BlendEquation) {
        match self.change_mode {
            StateChangeMode::Deferred => self.blend_equation = equation,
            StateChangeMode::Direct => self.device.blend_equation(equation),
        }
    }
}
