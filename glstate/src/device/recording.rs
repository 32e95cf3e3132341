//! Recording graphics device
//!
//! Captures every call instead of forwarding it. Used to count redundant
//! state changes and as the device double in tests.

use super::{
    BlendEquation, BlendFactor, CompareFunc, DrawCall, GraphicsDevice, TextureMode, Uniform,
    VertexBufferId,
};
use crate::shader::ShaderHandle;

/// One captured device call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Color([f32; 4]),
    BlendFunc(BlendFactor, BlendFactor),
    BlendEquation(BlendEquation),
    AlphaFunc(CompareFunc, f32),
    AlphaTest(bool),
    Texturing(bool),
    TextureMode(TextureMode),
    Fog(bool),
    FogColor([f32; 4]),
    FogDensity(f32),
    SphereMap(bool),
    BindVertexBuffer(Option<VertexBufferId>),
    UseProgram(Option<ShaderHandle>),
    /// Any uniform except the light array
    Uniform(ShaderHandle, Uniform<'static>),
    /// The light array, copied out of the caller's buffer
    Lights(ShaderHandle, Vec<[f32; 4]>),
    Draw(DrawCall),
}

impl DeviceCall {
    /// True for blend-function, blend-equation, alpha-function and alpha-test calls
    pub fn is_blend_or_alpha(&self) -> bool {
        matches!(
            self,
            DeviceCall::BlendFunc(..)
                | DeviceCall::BlendEquation(_)
                | DeviceCall::AlphaFunc(..)
                | DeviceCall::AlphaTest(_)
        )
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, DeviceCall::Uniform(..) | DeviceCall::Lights(..))
    }
}

/// Device that records calls in order
#[derive(Debug, Default)]
pub struct RecordingDevice {
    calls: Vec<DeviceCall>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since creation or the last `take_calls`/`clear`
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Drain the recorded calls
    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls matching a predicate
    pub fn count(&self, pred: impl Fn(&DeviceCall) -> bool) -> usize {
        self.calls.iter().filter(|&c| pred(c)).count()
    }

    /// Number of draws issued
    pub fn draw_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::Draw(_)))
    }
}

/// Re-borrow a uniform with a `'static` lifetime, if it holds no borrowed data
fn detach(uniform: Uniform<'_>) -> Option<Uniform<'static>> {
    Some(match uniform {
        Uniform::FogEnabled(v) => Uniform::FogEnabled(v),
        Uniform::TextureMode(v) => Uniform::TextureMode(v),
        Uniform::CameraPos(v) => Uniform::CameraPos(v),
        Uniform::LightParms(v) => Uniform::LightParms(v),
        Uniform::FogColor(v) => Uniform::FogColor(v),
        Uniform::FogDensity(v) => Uniform::FogDensity(v),
        Uniform::DynLightColor(v) => Uniform::DynLightColor(v),
        Uniform::GlowTopColor(v) => Uniform::GlowTopColor(v),
        Uniform::GlowBottomColor(v) => Uniform::GlowBottomColor(v),
        Uniform::GlowTopPlane(v) => Uniform::GlowTopPlane(v),
        Uniform::GlowBottomPlane(v) => Uniform::GlowBottomPlane(v),
        Uniform::Colormap(v) => Uniform::Colormap(v),
        Uniform::WarpTime(v) => Uniform::WarpTime(v),
        Uniform::LightRange(v) => Uniform::LightRange(v),
        Uniform::Lights(_) => return None,
    })
}

impl GraphicsDevice for RecordingDevice {
    fn color(&mut self, rgba: [f32; 4]) {
        self.calls.push(DeviceCall::Color(rgba));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.calls.push(DeviceCall::BlendFunc(src, dst));
    }

    fn blend_equation(&mut self, equation: BlendEquation) {
        self.calls.push(DeviceCall::BlendEquation(equation));
    }

    fn alpha_func(&mut self, func: CompareFunc, threshold: f32) {
        self.calls.push(DeviceCall::AlphaFunc(func, threshold));
    }

    fn set_alpha_test(&mut self, enabled: bool) {
        self.calls.push(DeviceCall::AlphaTest(enabled));
    }

    fn set_texturing(&mut self, enabled: bool) {
        self.calls.push(DeviceCall::Texturing(enabled));
    }

    fn texture_mode(&mut self, mode: TextureMode) {
        self.calls.push(DeviceCall::TextureMode(mode));
    }

    fn set_fog(&mut self, enabled: bool) {
        self.calls.push(DeviceCall::Fog(enabled));
    }

    fn fog_color(&mut self, rgba: [f32; 4]) {
        self.calls.push(DeviceCall::FogColor(rgba));
    }

    fn fog_density(&mut self, density: f32) {
        self.calls.push(DeviceCall::FogDensity(density));
    }

    fn sphere_map(&mut self, enabled: bool) {
        self.calls.push(DeviceCall::SphereMap(enabled));
    }

    fn bind_vertex_buffer(&mut self, buffer: Option<VertexBufferId>) {
        self.calls.push(DeviceCall::BindVertexBuffer(buffer));
    }

    fn use_program(&mut self, program: Option<ShaderHandle>) {
        self.calls.push(DeviceCall::UseProgram(program));
    }

    fn set_uniform(&mut self, program: ShaderHandle, uniform: Uniform<'_>) {
        let call = match uniform {
            Uniform::Lights(data) => DeviceCall::Lights(program, data.to_vec()),
            other => match detach(other) {
                Some(owned) => DeviceCall::Uniform(program, owned),
                None => return,
            },
        };
        self.calls.push(call);
    }

    fn draw(&mut self, draw: &DrawCall) {
        self.calls.push(DeviceCall::Draw(*draw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut device = RecordingDevice::new();
        device.color([1.0, 0.0, 0.0, 1.0]);
        device.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        device.draw(&DrawCall::triangles(0, 3));

        assert_eq!(
            device.calls(),
            &[
                DeviceCall::Color([1.0, 0.0, 0.0, 1.0]),
                DeviceCall::BlendFunc(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
                DeviceCall::Draw(DrawCall::triangles(0, 3)),
            ]
        );
        assert_eq!(device.count(DeviceCall::is_blend_or_alpha), 1);
        assert_eq!(device.draw_count(), 1);
    }

    #[test]
    fn test_light_uniform_is_copied() {
        let mut device = RecordingDevice::new();
        let lights = [[1.0, 2.0, 3.0, 4.0]];
        device.set_uniform(ShaderHandle(7), Uniform::Lights(&lights));
        device.set_uniform(ShaderHandle(7), Uniform::WarpTime(0.5));

        assert_eq!(
            device.take_calls(),
            vec![
                DeviceCall::Lights(ShaderHandle(7), vec![[1.0, 2.0, 3.0, 4.0]]),
                DeviceCall::Uniform(ShaderHandle(7), Uniform::WarpTime(0.5)),
            ]
        );
        assert!(device.calls().is_empty());
    }
}
