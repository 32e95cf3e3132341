//! Material shader setup
//!
//! Decides, per shader model, which material program a texture gets and
//! whether its colormap is applied in the shader or left to the caller.

use super::{Colormap, MaterialShader, ShaderCaps, ShaderModel, WarpKind};
use crate::device::TextureMode;

/// Material and colormap requested for the next surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderRequest {
    pub material: MaterialShader,
    pub colormap: Colormap,
    /// Camera textures always take the colormap path when shaders exist
    pub camera_texture: bool,
    pub texture_mode: TextureMode,
    pub brightmap_enabled: bool,
    pub warp_time: f32,
}

impl ShaderRequest {
    pub fn new(material: MaterialShader, colormap: Colormap) -> Self {
        Self {
            material,
            colormap,
            camera_texture: false,
            texture_mode: TextureMode::Modulate,
            brightmap_enabled: true,
            warp_time: 0.0,
        }
    }
}

/// Result of [`setup_shader`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderSetup {
    /// Material program to use
    pub material: MaterialShader,
    /// Colormap the shader applies (`DEFAULT` if none)
    pub colormap_state: Colormap,
    /// Colormap the caller must bake into the texture instead
    pub texture_colormap: Colormap,
    /// Warp the caller must perform in software
    pub software_warp: Option<WarpKind>,
    pub colormap_in_shader: bool,
    pub warp_time: f32,
}

/// Resolve a material request against the backend's capabilities.
///
/// Pure: makes no device calls and touches no state.
pub fn setup_shader(caps: &ShaderCaps, request: &ShaderRequest) -> ShaderSetup {
    let mut material = request.material;
    let cm = request.colormap;
    let mut software_warp = None;

    if material == MaterialShader::Brightmap && (!request.brightmap_enabled || cm.is_special()) {
        material = MaterialShader::Default;
    }

    let in_range = cm.in_shader_range(caps.max_colormap);
    let use_cm_shader = match caps.model {
        ShaderModel::Sm4 => in_range && request.texture_mode != TextureMode::Mask,
        ShaderModel::Sm3 => {
            let use_cm = in_range
                && request.texture_mode != TextureMode::Mask
                && (request.camera_texture || caps.colormap_shader);

            if material == MaterialShader::Brightmap {
                if !caps.brightmap_shader {
                    material = MaterialShader::Default;
                }
            } else if !caps.warp_shader {
                software_warp = material.warp();
                material = MaterialShader::Default;
            }
            use_cm
        }
        ShaderModel::Sm2 => {
            software_warp = material.warp();
            material = MaterialShader::Default;
            request.camera_texture
        }
    };

    let (colormap_state, texture_colormap) = if use_cm_shader {
        (cm, Colormap::DEFAULT)
    } else {
        (Colormap::DEFAULT, cm)
    };

    ShaderSetup {
        material,
        colormap_state,
        texture_colormap,
        software_warp,
        colormap_in_shader: use_cm_shader,
        warp_time: request.warp_time,
    }
}
