// ============================================================================
// Render State Aggregator
// ============================================================================
//
// One RenderState per graphics context. It holds the logical state the call
// sites asked for and a shadow of what the device last received; `apply`
// closes the gap with as few device calls as possible.
//
// - setters: logical-state mutators
// - commit: Commit and apply
// - shadow: device-side shadow and per-program uniform shadows
// - lights: borrowed per-surface light data

mod commit;
mod lights;
mod setters;
mod shadow;

#[cfg(test)]
mod tests;

pub use commit::Commit;
pub use lights::LightList;

use crate::attr::{StateVec3, StateVec4};
use crate::config::{RenderConfig, StateChangeMode};
use crate::device::{
    BlendEquation, BlendFactor, CompareFunc, GraphicsDevice, TextureMode, VertexBufferId,
};
use crate::shader::{
    Colormap, MaterialShader, ModeFlags, RenderMode, ShaderCaps, ShaderRequest, ShaderSetup,
    SpecialEffect, setup_shader,
};
use glstate_shared::PalEntry;
use shadow::DeviceShadow;

/// Render-state cache for one graphics context.
///
/// Owns its device. Setters only record; [`apply`](Self::apply) reconciles
/// the device with the recorded state and issues the draw. Exceptions: color
/// setters reach the device immediately, and in [`StateChangeMode::Direct`]
/// so do the blend/alpha setters.
#[derive(Debug)]
pub struct RenderState<D: GraphicsDevice> {
    device: D,
    change_mode: StateChangeMode,
    caps: ShaderCaps,

    texture_enabled: bool,
    fog_enabled: bool,
    glow_enabled: bool,
    light_enabled: bool,
    brightmap_enabled: bool,
    special_effect: SpecialEffect,
    texture_mode: TextureMode,
    two_d: bool,

    color: StateVec4,
    camera_pos: StateVec3,
    glow_top: StateVec4,
    glow_bottom: StateVec4,
    glow_top_plane: StateVec4,
    glow_bottom_plane: StateVec4,

    fog_color: PalEntry,
    fog_density: f32,
    dyn_color: PalEntry,
    light_parms: [f32; 2],

    material: MaterialShader,
    colormap: Colormap,
    warp_time: f32,

    src_blend: BlendFactor,
    dst_blend: BlendFactor,
    blend_equation: BlendEquation,
    alpha_func: CompareFunc,
    alpha_threshold: f32,
    alpha_test: bool,

    vertex_buffer: Option<VertexBufferId>,

    shadow: DeviceShadow,
}

impl<D: GraphicsDevice> RenderState<D> {
    /// Create a state for `device` using the configured strategy and caps.
    ///
    /// Starts in the reset state; nothing is sent to the device.
    pub fn new(device: D, config: &RenderConfig) -> Self {
        Self::with_caps(device, config.state.change_mode, config.shaders.caps())
    }

    pub fn with_caps(device: D, change_mode: StateChangeMode, caps: ShaderCaps) -> Self {
        let mut state = Self {
            device,
            change_mode,
            caps,
            texture_enabled: true,
            fog_enabled: false,
            glow_enabled: false,
            light_enabled: false,
            brightmap_enabled: false,
            special_effect: SpecialEffect::None,
            texture_mode: TextureMode::Modulate,
            two_d: true,
            color: StateVec4::new(),
            camera_pos: StateVec3::new(),
            glow_top: StateVec4::new(),
            glow_bottom: StateVec4::new(),
            glow_top_plane: StateVec4::new(),
            glow_bottom_plane: StateVec4::new(),
            fog_color: PalEntry::WHITE,
            fog_density: 0.0,
            dyn_color: PalEntry::BLACK,
            light_parms: [0.0; 2],
            material: MaterialShader::Default,
            colormap: Colormap::DEFAULT,
            warp_time: 0.0,
            src_blend: BlendFactor::SrcAlpha,
            dst_blend: BlendFactor::OneMinusSrcAlpha,
            blend_equation: BlendEquation::Add,
            alpha_func: CompareFunc::GreaterEqual,
            alpha_threshold: 0.5,
            alpha_test: false,
            vertex_buffer: None,
            shadow: DeviceShadow::default(),
        };
        state.reset();
        state
    }

    /// Restore every logical field to its default and mark the whole device
    /// shadow unknown. Makes no device calls.
    pub fn reset(&mut self) {
        self.texture_enabled = true;
        self.fog_enabled = false;
        self.glow_enabled = false;
        self.light_enabled = false;
        self.brightmap_enabled = false;
        self.special_effect = SpecialEffect::None;
        self.texture_mode = TextureMode::Modulate;
        self.two_d = true;

        self.color.set(1.0, 1.0, 1.0, 1.0);
        self.camera_pos.set(0.0, 0.0, 0.0);
        self.glow_top.set(0.0, 0.0, 0.0, 0.0);
        self.glow_bottom.set(0.0, 0.0, 0.0, 0.0);
        self.glow_top_plane.set(0.0, 0.0, 0.0, 0.0);
        self.glow_bottom_plane.set(0.0, 0.0, 0.0, 0.0);

        self.fog_color = PalEntry::WHITE;
        self.fog_density = 0.0;
        self.dyn_color = PalEntry::BLACK;
        self.light_parms = [0.0; 2];

        self.material = MaterialShader::Default;
        self.colormap = Colormap::DEFAULT;
        self.warp_time = 0.0;

        self.src_blend = BlendFactor::SrcAlpha;
        self.dst_blend = BlendFactor::OneMinusSrcAlpha;
        self.blend_equation = BlendEquation::Add;
        self.alpha_func = CompareFunc::GreaterEqual;
        self.alpha_threshold = 0.5;
        self.alpha_test = false;

        self.vertex_buffer = None;

        self.shadow = DeviceShadow::default();
        tracing::trace!("Render state reset");
    }

    /// Switch the blend/alpha strategy.
    ///
    /// Meant for frame boundaries. Leaving deferred mode first flushes any
    /// pending blend/alpha values. Switching forgets the deferred shadow, so
    /// the next deferred commit re-sends every blend/alpha parameter.
    pub fn set_state_change_mode(&mut self, mode: StateChangeMode) {
        if mode == self.change_mode {
            return;
        }
        if self.change_mode == StateChangeMode::Deferred {
            self.apply_blend();
        }
        tracing::debug!(
            "State change mode {:?} -> {:?}",
            self.change_mode,
            mode
        );
        self.change_mode = mode;
        self.shadow.invalidate_blend();
    }

    pub fn state_change_mode(&self) -> StateChangeMode {
        self.change_mode
    }

    pub fn caps(&self) -> &ShaderCaps {
        &self.caps
    }

    /// Logical draw color
    pub fn color(&self) -> &StateVec4 {
        &self.color
    }

    pub fn fog_color(&self) -> PalEntry {
        self.fog_color
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Current logical mode, as seen by shader resolution
    pub fn render_mode(&self) -> RenderMode {
        let mut flags = ModeFlags::empty();
        flags.set(ModeFlags::FOG, self.fog_enabled);
        flags.set(ModeFlags::GLOW, self.glow_enabled);
        flags.set(ModeFlags::LIGHTS, self.light_enabled);
        flags.set(ModeFlags::TWO_D, self.two_d);

        RenderMode::new(
            self.special_effect,
            self.texture_enabled.then_some(self.material),
            self.colormap,
            flags,
        )
    }

    /// Resolve the material and colormap for the next surface and remember
    /// them for the next commit.
    ///
    /// The returned setup tells the caller which colormap to bake into the
    /// texture and which warp, if any, to perform in software.
    pub fn setup_shader(
        &mut self,
        material: MaterialShader,
        colormap: Colormap,
        camera_texture: bool,
        warp_time: f32,
    ) -> ShaderSetup {
        let request = ShaderRequest {
            material,
            colormap,
            camera_texture,
            texture_mode: self.texture_mode,
            brightmap_enabled: self.brightmap_enabled,
            warp_time,
        };
        let setup = setup_shader(&self.caps, &request);

        self.material = setup.material;
        self.colormap = setup.colormap_state;
        self.warp_time = setup.warp_time;
        setup
    }
}
