//! Commit: reconcile the device with the logical state, then draw

use super::lights::LightList;
use super::shadow::{ProgramUniforms, reconcile};
use super::RenderState;
use crate::config::StateChangeMode;
use crate::device::{DrawCall, GraphicsDevice, Uniform};
use crate::error::CommitError;
use crate::shader::{ShaderHandle, ShaderProvider, ShaderVariant, SpecialEffect, resolve_variant};

/// Fixed-function fog density is given per map unit; the device wants it per
/// 64000 units.
const FIXED_FOG_DENSITY_SCALE: f32 = 1.0 / 64000.0;

/// Per-draw commit arguments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Commit<'a> {
    /// Draw to issue once the state is reconciled
    pub draw: Option<DrawCall>,
    /// Take the fixed-function path even when a program is needed
    pub force_no_shader: bool,
    /// Dynamic lights for this surface; only read while lighting is enabled
    pub lights: Option<LightList<'a>>,
}

impl<'a> Commit<'a> {
    /// Reconcile state without drawing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draw(mut self, draw: DrawCall) -> Self {
        self.draw = Some(draw);
        self
    }

    pub fn with_lights(mut self, lights: LightList<'a>) -> Self {
        self.lights = Some(lights);
        self
    }

    pub fn without_shader(mut self) -> Self {
        self.force_no_shader = true;
        self
    }
}

impl<D: GraphicsDevice> RenderState<D> {
    /// Bring the device in line with the logical state and issue the draw.
    ///
    /// Every attribute whose shadow already matches is skipped. Blend, color
    /// and buffer state are reconciled before the shader is looked up, so a
    /// failed lookup leaves them synchronized; the draw is then skipped and
    /// the error returned. Retrying with
    /// [`Commit::without_shader`] takes the fixed-function path.
    pub fn apply(
        &mut self,
        shaders: &mut impl ShaderProvider,
        commit: Commit<'_>,
    ) -> Result<(), CommitError> {
        self.apply_blend();

        if self.shadow.color.update(&self.color) {
            self.device.color(*self.color.values());
        }

        if reconcile(&mut self.shadow.vertex_buffer, self.vertex_buffer) {
            self.device.bind_vertex_buffer(self.vertex_buffer);
        }

        if commit.force_no_shader {
            self.apply_fixed_function();
        } else {
            self.apply_shader(shaders, commit.lights.unwrap_or_default())?;
        }

        if let Some(draw) = &commit.draw {
            self.device.draw(draw);
        }
        Ok(())
    }

    pub(super) fn apply_blend(&mut self) {
        if self.change_mode != StateChangeMode::Deferred {
            return;
        }
        let shadow = &mut self.shadow;
        let device = &mut self.device;

        if reconcile(&mut shadow.blend_func, (self.src_blend, self.dst_blend)) {
            device.blend_func(self.src_blend, self.dst_blend);
        }
        if reconcile(&mut shadow.alpha_func, (self.alpha_func, self.alpha_threshold)) {
            device.alpha_func(self.alpha_func, self.alpha_threshold);
        }
        if reconcile(&mut shadow.alpha_test, self.alpha_test) {
            device.set_alpha_test(self.alpha_test);
        }
        if reconcile(&mut shadow.blend_equation, self.blend_equation) {
            device.blend_equation(self.blend_equation);
        }
    }

    fn apply_shader(
        &mut self,
        shaders: &mut impl ShaderProvider,
        lights: LightList<'_>,
    ) -> Result<(), CommitError> {
        let handle = match resolve_variant(&self.caps, &self.render_mode()) {
            ShaderVariant::FixedFunction => {
                self.apply_fixed_function();
                return Ok(());
            }
            ShaderVariant::Program(key) => shaders.program(key).ok_or_else(|| {
                tracing::warn!("Shader program unavailable: {:?}", key);
                CommitError::ProgramUnavailable(key)
            })?,
            ShaderVariant::Effect(effect) => shaders.effect(effect).ok_or_else(|| {
                tracing::warn!("Effect program unavailable: {:?}", effect);
                CommitError::EffectUnavailable(effect)
            })?,
        };

        self.use_program(Some(handle));
        self.apply_uniforms(handle, lights);
        Ok(())
    }

    fn use_program(&mut self, program: Option<ShaderHandle>) {
        if reconcile(&mut self.shadow.program, program) {
            tracing::debug!("Activating program {:?}", program);
            self.device.use_program(program);
        }
    }

    /// Value of the fog uniform: 0 when off, the fog mode when the fog color
    /// is black, the negated fog mode otherwise
    fn fog_uniform(&self) -> i32 {
        if !self.fog_enabled {
            0
        } else if self.fog_color.rgb_is_black() {
            i32::from(self.caps.fog_mode)
        } else {
            -i32::from(self.caps.fog_mode)
        }
    }

    fn apply_uniforms(&mut self, program: ShaderHandle, lights: LightList<'_>) {
        let fog = self.fog_uniform();
        let u: &mut ProgramUniforms = self.shadow.uniforms.entry(program).or_default();
        let device = &mut self.device;

        if reconcile(&mut u.fog_enabled, fog) {
            device.set_uniform(program, Uniform::FogEnabled(fog));
        }
        if fog != 0 {
            if reconcile(&mut u.fog_color, self.fog_color) {
                device.set_uniform(program, Uniform::FogColor(self.fog_color.to_rgba_f32()));
            }
            if reconcile(&mut u.fog_density, self.fog_density) {
                device.set_uniform(program, Uniform::FogDensity(self.fog_density));
            }
        }
        if reconcile(&mut u.texture_mode, self.texture_mode) {
            device.set_uniform(program, Uniform::TextureMode(self.texture_mode));
        }

        if self.glow_enabled {
            if u.glow_top.update(&self.glow_top) {
                device.set_uniform(program, Uniform::GlowTopColor(*self.glow_top.values()));
            }
            if u.glow_bottom.update(&self.glow_bottom) {
                device.set_uniform(program, Uniform::GlowBottomColor(*self.glow_bottom.values()));
            }
            if u.glow_top_plane.update(&self.glow_top_plane) {
                device.set_uniform(program, Uniform::GlowTopPlane(*self.glow_top_plane.values()));
            }
            if u.glow_bottom_plane.update(&self.glow_bottom_plane) {
                device.set_uniform(
                    program,
                    Uniform::GlowBottomPlane(*self.glow_bottom_plane.values()),
                );
            }
        }

        if reconcile(&mut u.light_parms, self.light_parms) {
            device.set_uniform(program, Uniform::LightParms(self.light_parms));
        }
        if reconcile(&mut u.dyn_color, self.dyn_color) {
            device.set_uniform(program, Uniform::DynLightColor(self.dyn_color.to_rgba_f32()));
        }

        if self.light_enabled {
            let counts = lights.counts();
            if reconcile(&mut u.light_range, counts) {
                device.set_uniform(program, Uniform::LightRange(counts));
            }
            if !lights.is_empty() {
                device.set_uniform(program, Uniform::Lights(lights.vec4s()));
            }
        }

        if u.camera_pos.update(&self.camera_pos) {
            device.set_uniform(program, Uniform::CameraPos(*self.camera_pos.values()));
        }
        if reconcile(&mut u.colormap, self.colormap) {
            device.set_uniform(program, Uniform::Colormap(self.colormap));
        }
        if reconcile(&mut u.warp_time, self.warp_time) {
            device.set_uniform(program, Uniform::WarpTime(self.warp_time));
        }
    }

    fn apply_fixed_function(&mut self) {
        self.use_program(None);

        let ff = &mut self.shadow.fixed;
        let device = &mut self.device;

        if reconcile(&mut ff.texture_mode, self.texture_mode) {
            device.texture_mode(self.texture_mode);
        }
        if reconcile(&mut ff.texturing, self.texture_enabled) {
            device.set_texturing(self.texture_enabled);
        }
        if reconcile(&mut ff.fog, self.fog_enabled) {
            device.set_fog(self.fog_enabled);
        }
        if self.fog_enabled {
            if reconcile(&mut ff.fog_color, self.fog_color) {
                device.fog_color(self.fog_color.to_rgba_f32());
            }
            if reconcile(&mut ff.fog_density, self.fog_density) {
                device.fog_density(self.fog_density * FIXED_FOG_DENSITY_SCALE);
            }
        }

        let sphere_map = self.special_effect == SpecialEffect::SphereMap;
        if reconcile(&mut ff.sphere_map, sphere_map) {
            device.sphere_map(sphere_map);
        }
    }
}
