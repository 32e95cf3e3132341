//! Tests for the render state aggregator

use glam::Vec4;

use super::*;
use crate::device::{DeviceCall, DrawCall, RecordingDevice, Uniform};
use crate::error::CommitError;
use crate::shader::{ProgramTable, ShaderHandle, ShaderKey, ShaderModel};
use glstate_shared::SecPlane;

fn state() -> RenderState<RecordingDevice> {
    RenderState::with_caps(
        RecordingDevice::new(),
        StateChangeMode::Deferred,
        ShaderCaps::default(),
    )
}

fn state_with_model(model: ShaderModel) -> RenderState<RecordingDevice> {
    let caps = ShaderCaps {
        model,
        ..ShaderCaps::default()
    };
    RenderState::with_caps(RecordingDevice::new(), StateChangeMode::Deferred, caps)
}

/// A 3D shader-model-4 state with the plain textured program registered
fn shaded() -> (RenderState<RecordingDevice>, ProgramTable) {
    let mut state = state();
    state.set_2d_mode(false);
    let mut table = ProgramTable::new();
    table.insert_program(ShaderKey::textured(MaterialShader::Default), ShaderHandle(1));
    (state, table)
}

fn draw() -> Commit<'static> {
    Commit::new().with_draw(DrawCall::triangles(0, 3))
}

fn settle(state: &mut RenderState<RecordingDevice>, shaders: &mut ProgramTable) {
    state.apply(shaders, Commit::new()).unwrap();
    state.device_mut().clear();
}

fn uniforms(state: &RenderState<RecordingDevice>) -> Vec<DeviceCall> {
    state
        .device()
        .calls()
        .iter()
        .filter(|c| c.is_uniform())
        .cloned()
        .collect()
}

// ============================================================================
// Deferred blend / alpha
// ============================================================================

#[test]
fn test_first_apply_sends_every_deferred_attribute() {
    let mut state = state();
    let mut table = ProgramTable::new();
    state.apply(&mut table, draw()).unwrap();

    let device = state.device();
    assert_eq!(device.count(DeviceCall::is_blend_or_alpha), 4);
    assert_eq!(device.count(|c| matches!(c, DeviceCall::Color(_))), 1);
    assert_eq!(device.draw_count(), 1);
    assert!(device.calls().contains(&DeviceCall::BlendFunc(
        BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha
    )));
    assert!(device
        .calls()
        .contains(&DeviceCall::AlphaFunc(CompareFunc::GreaterEqual, 0.5)));
    assert!(device.calls().contains(&DeviceCall::AlphaTest(false)));
    assert!(device.calls().contains(&DeviceCall::BlendEquation(BlendEquation::Add)));
}

#[test]
fn test_second_apply_only_draws() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.apply(&mut table, draw()).unwrap();
    assert_eq!(
        state.device().calls(),
        &[DeviceCall::Draw(DrawCall::triangles(0, 3))]
    );
}

#[test]
fn test_set_color_after_reset_is_one_color_call() {
    let mut state = state();
    let mut table = ProgramTable::new();
    state.reset();
    settle(&mut state, &mut table);

    state.set_color(1.0, 0.0, 0.0, 1.0, 0);
    state.apply(&mut table, Commit::new()).unwrap();

    let device = state.device();
    assert_eq!(device.calls(), &[DeviceCall::Color([1.0, 0.0, 0.0, 1.0])]);
    assert_eq!(device.count(DeviceCall::is_blend_or_alpha), 0);
}

#[test]
fn test_reset_makes_no_calls_and_forces_resend() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.reset();
    assert!(state.device().calls().is_empty());

    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(state.device().count(DeviceCall::is_blend_or_alpha), 4);
    assert_eq!(
        state.device().count(|c| matches!(c, DeviceCall::Color(_))),
        1
    );
}

#[test]
fn test_reset_clears_camera_and_glow() {
    let (mut state, mut table) = shaded();
    table.insert_program(
        ShaderKey::textured(MaterialShader::Default).with_glow(true),
        ShaderHandle(5),
    );
    state.set_camera_pos(10.0, 20.0, 30.0);
    state.set_glow_params(Vec4::ONE, Vec4::ONE);
    settle(&mut state, &mut table);

    state.reset();
    state.set_2d_mode(false);
    state.enable_glow(true);
    state.apply(&mut table, Commit::new()).unwrap();

    let sent = uniforms(&state);
    assert!(sent.contains(&DeviceCall::Uniform(ShaderHandle(5), Uniform::CameraPos([0.0; 3]))));
    assert!(sent.contains(&DeviceCall::Uniform(ShaderHandle(5), Uniform::GlowTopColor([0.0; 4]))));
    assert!(!sent.contains(&DeviceCall::Uniform(
        ShaderHandle(5),
        Uniform::CameraPos([10.0, 30.0, 20.0])
    )));
    assert!(!sent.contains(&DeviceCall::Uniform(ShaderHandle(5), Uniform::GlowTopColor([1.0; 4]))));
}

#[test]
fn test_only_changed_attributes_generate_calls() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.blend_func(BlendFactor::One, BlendFactor::Zero);
    state.enable_alpha_test(true);
    state.apply(&mut table, Commit::new()).unwrap();

    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::BlendFunc(BlendFactor::One, BlendFactor::Zero),
            DeviceCall::AlphaTest(true),
        ]
    );
}

#[test]
fn test_setting_current_value_is_silent() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    state.alpha_func(CompareFunc::GreaterEqual, 0.5);
    state.blend_equation(BlendEquation::Add);
    state.apply(&mut table, Commit::new()).unwrap();

    assert!(state.device().calls().is_empty());
}

#[test]
fn test_setters_record_without_device_calls() {
    let mut state = state();
    state.blend_func(BlendFactor::One, BlendFactor::One);
    state.alpha_func(CompareFunc::Greater, 0.0);
    state.enable_alpha_test(true);
    state.blend_equation(BlendEquation::ReverseSubtract);
    state.enable_fog(true);
    state.set_vertex_buffer(Some(VertexBufferId(3)));
    assert!(state.device().calls().is_empty());
}

// ============================================================================
// Direct mode
// ============================================================================

#[test]
fn test_direct_mode_calls_immediately() {
    let mut state = RenderState::with_caps(
        RecordingDevice::new(),
        StateChangeMode::Direct,
        ShaderCaps::default(),
    );
    let mut table = ProgramTable::new();

    state.blend_func(BlendFactor::One, BlendFactor::One);
    assert_eq!(
        state.device().calls(),
        &[DeviceCall::BlendFunc(BlendFactor::One, BlendFactor::One)]
    );

    state.device_mut().clear();
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(state.device().count(DeviceCall::is_blend_or_alpha), 0);
}

#[test]
fn test_direct_mode_forwards_each_setter() {
    let mut state = RenderState::with_caps(
        RecordingDevice::new(),
        StateChangeMode::Direct,
        ShaderCaps::default(),
    );
    state.alpha_func(CompareFunc::Less, 0.25);
    state.enable_alpha_test(true);
    state.blend_equation(BlendEquation::Max);

    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::AlphaFunc(CompareFunc::Less, 0.25),
            DeviceCall::AlphaTest(true),
            DeviceCall::BlendEquation(BlendEquation::Max),
        ]
    );
}

#[test]
fn test_switching_mode_invalidates_blend_shadow() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.set_state_change_mode(StateChangeMode::Direct);
    assert_eq!(state.state_change_mode(), StateChangeMode::Direct);
    state.set_state_change_mode(StateChangeMode::Deferred);

    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(state.device().count(DeviceCall::is_blend_or_alpha), 4);
}

#[test]
fn test_leaving_deferred_mode_flushes_pending_blend() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.blend_func(BlendFactor::One, BlendFactor::One);
    state.blend_equation(BlendEquation::Subtract);
    state.set_state_change_mode(StateChangeMode::Direct);
    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::BlendFunc(BlendFactor::One, BlendFactor::One),
            DeviceCall::BlendEquation(BlendEquation::Subtract),
        ]
    );

    state.device_mut().clear();
    state.apply(&mut table, draw()).unwrap();
    assert_eq!(
        state.device().calls(),
        &[DeviceCall::Draw(DrawCall::triangles(0, 3))]
    );
}

#[test]
fn test_into_device_returns_recorded_calls() {
    let mut state = state();
    state.reset_color();
    let device = state.into_device();
    assert_eq!(device.calls(), &[DeviceCall::Color([1.0; 4])]);
}

#[test]
fn test_new_uses_config() {
    let mut config = RenderConfig::default();
    config.state.change_mode = StateChangeMode::Direct;
    config.shaders.model = ShaderModel::Sm3;

    let state = RenderState::new(RecordingDevice::new(), &config);
    assert_eq!(state.state_change_mode(), StateChangeMode::Direct);
    assert_eq!(state.caps().model, ShaderModel::Sm3);
    assert!(state.device().calls().is_empty());
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn test_color_setters_are_immediate() {
    let mut state = state();
    state.set_color_pal(PalEntry::rgba(255, 0, 0, 0), 0);
    state.set_color_alpha(PalEntry::rgb(0, 255, 0), 0.5, 0);
    state.reset_color();

    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::Color([1.0, 0.0, 0.0, 0.0]),
            DeviceCall::Color([0.0, 1.0, 0.0, 0.5]),
            DeviceCall::Color([1.0, 1.0, 1.0, 1.0]),
        ]
    );
    assert_eq!(state.color().values(), &[1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_color_desaturation() {
    let mut state = state();
    state.set_color(1.0, 0.0, 0.0, 1.0, 255);
    let [r, g, b, a] = *state.color().values();
    assert!((r - g).abs() < 1e-6);
    assert!((g - b).abs() < 1e-6);
    assert_eq!(a, 1.0);
}

// ============================================================================
// Vertex buffers
// ============================================================================

#[test]
fn test_vertex_buffer_rebinds_only_on_change() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.set_vertex_buffer(Some(VertexBufferId(7)));
    state.apply(&mut table, Commit::new()).unwrap();
    state.set_vertex_buffer(Some(VertexBufferId(7)));
    state.apply(&mut table, Commit::new()).unwrap();
    state.set_vertex_buffer(None);
    state.apply(&mut table, Commit::new()).unwrap();

    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::BindVertexBuffer(Some(VertexBufferId(7))),
            DeviceCall::BindVertexBuffer(None),
        ]
    );
}

// ============================================================================
// Shaders
// ============================================================================

#[test]
fn test_render_mode_after_reset() {
    let state = state();
    assert_eq!(
        state.render_mode(),
        RenderMode::Surface {
            texture: Some(MaterialShader::Default),
            colormap: Colormap::DEFAULT,
            flags: ModeFlags::TWO_D,
        }
    );
}

#[test]
fn test_program_activated_once() {
    let (mut state, mut table) = shaded();
    state.apply(&mut table, draw()).unwrap();
    state.apply(&mut table, draw()).unwrap();

    let device = state.device();
    assert_eq!(
        device.count(|c| matches!(c, DeviceCall::UseProgram(_))),
        1
    );
    assert!(device.calls().contains(&DeviceCall::UseProgram(Some(ShaderHandle(1)))));
    assert_eq!(device.draw_count(), 2);
}

#[test]
fn test_uniforms_sent_once_per_program() {
    let (mut state, mut table) = shaded();
    table.insert_program(ShaderKey::untextured(), ShaderHandle(2));

    state.apply(&mut table, Commit::new()).unwrap();
    assert!(!uniforms(&state).is_empty());

    state.enable_texture(false);
    state.device_mut().clear();
    state.apply(&mut table, Commit::new()).unwrap();
    assert!(state.device().calls().contains(&DeviceCall::UseProgram(Some(ShaderHandle(2)))));
    assert!(!uniforms(&state).is_empty());

    // back to the first program: it already has every value
    state.enable_texture(true);
    state.device_mut().clear();
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(
        state.device().calls(),
        &[DeviceCall::UseProgram(Some(ShaderHandle(1)))]
    );
}

#[test]
fn test_missing_program_is_reported_without_draw() {
    let mut state = state();
    state.set_2d_mode(false);
    let mut table = ProgramTable::new();

    let err = state.apply(&mut table, draw()).unwrap_err();
    assert_eq!(
        err,
        CommitError::ProgramUnavailable(ShaderKey::textured(MaterialShader::Default))
    );
    assert_eq!(state.device().draw_count(), 0);
    // everything except the shader is reconciled
    assert_eq!(state.device().count(DeviceCall::is_blend_or_alpha), 4);

    state.device_mut().clear();
    state.apply(&mut table, draw().without_shader()).unwrap();
    let device = state.device();
    assert_eq!(device.count(DeviceCall::is_blend_or_alpha), 0);
    assert!(device.calls().contains(&DeviceCall::UseProgram(None)));
    assert_eq!(device.draw_count(), 1);
}

#[test]
fn test_force_no_shader_takes_fixed_function() {
    let (mut state, mut table) = shaded();
    state.apply(&mut table, Commit::new().without_shader()).unwrap();

    let device = state.device();
    assert!(device.calls().contains(&DeviceCall::UseProgram(None)));
    assert!(device.calls().contains(&DeviceCall::Texturing(true)));
    assert!(!device.calls().iter().any(|c| c.is_uniform()));
}

#[test]
fn test_fog_uniform_sign() {
    let (mut state, mut table) = shaded();
    state.enable_fog(true);
    state.set_fog(PalEntry::rgb(0, 0, 0), 1.0);
    state.apply(&mut table, Commit::new()).unwrap();
    assert!(uniforms(&state).contains(&DeviceCall::Uniform(
        ShaderHandle(1),
        Uniform::FogEnabled(1)
    )));

    state.device_mut().clear();
    state.set_fog(PalEntry::rgb(128, 0, 0), -1.0);
    state.apply(&mut table, Commit::new()).unwrap();
    let sent = uniforms(&state);
    assert!(sent.contains(&DeviceCall::Uniform(ShaderHandle(1), Uniform::FogEnabled(-1))));
    assert!(sent.contains(&DeviceCall::Uniform(
        ShaderHandle(1),
        Uniform::FogColor(PalEntry::rgb(128, 0, 0).to_rgba_f32())
    )));
    // density kept, so not re-sent
    assert!(!sent
        .iter()
        .any(|c| matches!(c, DeviceCall::Uniform(_, Uniform::FogDensity(_)))));

    state.device_mut().clear();
    state.enable_fog(false);
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(
        uniforms(&state),
        vec![DeviceCall::Uniform(ShaderHandle(1), Uniform::FogEnabled(0))]
    );
}

#[test]
fn test_glow_restamp_forces_resync() {
    let (mut state, mut table) = shaded();
    table.insert_program(
        ShaderKey::textured(MaterialShader::Default).with_glow(true),
        ShaderHandle(5),
    );
    state.enable_glow(true);
    let top = Vec4::new(1.0, 0.5, 0.0, 1.0);
    let bottom = Vec4::new(0.0, 0.0, 1.0, 1.0);

    state.set_glow_params(top, bottom);
    settle(&mut state, &mut table);

    state.apply(&mut table, Commit::new()).unwrap();
    assert!(uniforms(&state).is_empty());

    state.set_glow_params(top, bottom);
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(
        uniforms(&state),
        vec![
            DeviceCall::Uniform(ShaderHandle(5), Uniform::GlowTopColor([1.0, 0.5, 0.0, 1.0])),
            DeviceCall::Uniform(ShaderHandle(5), Uniform::GlowBottomColor([0.0, 0.0, 1.0, 1.0])),
        ]
    );
}

#[test]
fn test_glow_planes_from_fixed_point() {
    let (mut state, mut table) = shaded();
    table.insert_program(
        ShaderKey::textured(MaterialShader::Default).with_glow(true),
        ShaderHandle(5),
    );
    state.enable_glow(true);
    let ceiling = SecPlane::ceiling(128 << 16);
    let floor = SecPlane::floor(0);
    state.set_glow_planes(&ceiling, &floor);
    state.apply(&mut table, Commit::new()).unwrap();

    let sent = uniforms(&state);
    assert!(sent.contains(&DeviceCall::Uniform(
        ShaderHandle(5),
        Uniform::GlowTopPlane(ceiling.to_glow_plane())
    )));
    assert!(sent.contains(&DeviceCall::Uniform(
        ShaderHandle(5),
        Uniform::GlowBottomPlane(floor.to_glow_plane())
    )));
}

#[test]
fn test_camera_pos_uses_renderer_axes() {
    let (mut state, mut table) = shaded();
    state.set_camera_pos(1.0, 2.0, 3.0);
    state.apply(&mut table, Commit::new()).unwrap();
    assert!(uniforms(&state).contains(&DeviceCall::Uniform(
        ShaderHandle(1),
        Uniform::CameraPos([1.0, 3.0, 2.0])
    )));
}

#[test]
fn test_lights_resent_every_commit() {
    let (mut state, mut table) = shaded();
    table.insert_program(
        ShaderKey::textured(MaterialShader::Default).with_lights(true),
        ShaderHandle(9),
    );
    state.enable_light(true);
    let data = [[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
    let lights = LightList::from_vec4s([0, 1, 2], &data).unwrap();

    state.apply(&mut table, Commit::new().with_lights(lights)).unwrap();
    state.apply(&mut table, Commit::new().with_lights(lights)).unwrap();

    let device = state.device();
    assert_eq!(
        device.count(|c| matches!(c, DeviceCall::Lights(ShaderHandle(9), v) if v.len() == 2)),
        2
    );
    assert_eq!(
        device.count(|c| matches!(c, DeviceCall::Uniform(_, Uniform::LightRange([0, 1, 2])))),
        1
    );
}

#[test]
fn test_lights_ignored_while_lighting_disabled() {
    let (mut state, mut table) = shaded();
    let data = [0.0f32; 4];
    let lights = LightList::new([1, 1, 1], &data).unwrap();
    state.apply(&mut table, Commit::new().with_lights(lights)).unwrap();
    assert_eq!(
        state.device().count(|c| matches!(c, DeviceCall::Lights(..))),
        0
    );
}

#[test]
fn test_light_list_validation() {
    let data = [0.0f32; 8];
    assert!(LightList::new([0, 1, 2], &data).is_some());
    assert!(LightList::new([0, 1, 3], &data).is_none());
    assert!(LightList::new([2, 1, 2], &data).is_none());
    assert!(LightList::new([-1, 0, 0], &data).is_none());

    let list = LightList::new([0, 0, 1], &data).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.vec4s(), &[[0.0; 4]]);
    assert!(LightList::empty().is_empty());
}

#[test]
fn test_setup_shader_feeds_colormap_uniform() {
    let (mut state, mut table) = shaded();
    table.insert_program(ShaderKey::textured(MaterialShader::Warp1), ShaderHandle(3));

    let setup = state.setup_shader(MaterialShader::Warp1, Colormap(33), false, 1.5);
    assert!(setup.colormap_in_shader);
    assert_eq!(setup.material, MaterialShader::Warp1);

    state.apply(&mut table, Commit::new()).unwrap();
    let sent = uniforms(&state);
    assert!(sent.contains(&DeviceCall::Uniform(ShaderHandle(3), Uniform::Colormap(Colormap(33)))));
    assert!(sent.contains(&DeviceCall::Uniform(ShaderHandle(3), Uniform::WarpTime(1.5))));
}

#[test]
fn test_fixed_colormap_is_not_a_variant() {
    let (mut state, mut table) = shaded();
    settle(&mut state, &mut table);

    state.set_fixed_colormap(Colormap(34));
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(
        state.device().calls(),
        &[DeviceCall::Uniform(ShaderHandle(1), Uniform::Colormap(Colormap(34)))]
    );
}

#[test]
fn test_untextured_material_does_not_force_program() {
    let mut state = state_with_model(ShaderModel::Sm3);
    let mut table = ProgramTable::new();
    state.set_2d_mode(false);
    state.enable_texture(false);
    state.setup_shader(MaterialShader::Warp1, Colormap::DEFAULT, false, 1.0);

    assert_eq!(
        state.render_mode(),
        RenderMode::Surface {
            texture: None,
            colormap: Colormap::DEFAULT,
            flags: ModeFlags::empty(),
        }
    );
    state.apply(&mut table, draw()).unwrap();
    let device = state.device();
    assert!(device.calls().contains(&DeviceCall::UseProgram(None)));
    assert!(device.calls().contains(&DeviceCall::Texturing(false)));
    assert_eq!(device.draw_count(), 1);
}

// ============================================================================
// Special effects
// ============================================================================

#[test]
fn test_fog_toggle_under_effect_keeps_program() {
    let (mut state, mut table) = shaded();
    table.insert_effect(SpecialEffect::FogBoundary, ShaderHandle(4));
    state.set_effect(SpecialEffect::FogBoundary);
    settle(&mut state, &mut table);

    state.enable_fog(true);
    state.apply(&mut table, Commit::new()).unwrap();
    state.enable_fog(false);
    state.apply(&mut table, Commit::new()).unwrap();

    assert_eq!(
        state.device().count(|c| matches!(c, DeviceCall::UseProgram(_))),
        0
    );
}

#[test]
fn test_missing_effect_program() {
    let (mut state, mut table) = shaded();
    state.set_effect(SpecialEffect::SphereMap);
    assert_eq!(
        state.apply(&mut table, draw()),
        Err(CommitError::EffectUnavailable(SpecialEffect::SphereMap))
    );
}

#[test]
fn test_sm2_sphere_map_is_fixed_function() {
    let mut state = state_with_model(ShaderModel::Sm2);
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.set_effect(SpecialEffect::SphereMap);
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(state.device().calls(), &[DeviceCall::SphereMap(true)]);

    state.device_mut().clear();
    state.set_effect(SpecialEffect::None);
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(state.device().calls(), &[DeviceCall::SphereMap(false)]);
}

// ============================================================================
// Fixed-function fog
// ============================================================================

#[test]
fn test_fixed_function_fog() {
    let mut state = state();
    let mut table = ProgramTable::new();
    settle(&mut state, &mut table);

    state.enable_fog(true);
    state.set_fog(PalEntry::rgb(255, 0, 0), 64000.0);
    state.apply(&mut table, Commit::new()).unwrap();
    assert_eq!(
        state.device().calls(),
        &[
            DeviceCall::Fog(true),
            DeviceCall::FogColor([1.0, 0.0, 0.0, 1.0]),
            DeviceCall::FogDensity(64000.0 * (1.0 / 64000.0)),
        ]
    );
}

#[test]
fn test_negative_fog_density_keeps_previous() {
    let mut state = state();
    let mut table = ProgramTable::new();
    state.enable_fog(true);
    state.set_fog(PalEntry::WHITE, 2.0);
    state.set_fog(PalEntry::BLACK, -1.0);
    assert_eq!(state.fog_color(), PalEntry::BLACK);

    state.apply(&mut table, Commit::new()).unwrap();
    assert!(state
        .device()
        .calls()
        .contains(&DeviceCall::FogDensity(2.0 * (1.0 / 64000.0))));
}
