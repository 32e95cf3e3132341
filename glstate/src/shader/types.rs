//! Shader identity types

use serde::{Deserialize, Serialize};

/// Opaque handle to a linked shader program, issued by the shader subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Shader model of the backend
///
/// Decides which rendering modes need a program and which fall back to the
/// fixed-function pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ShaderModel {
    /// Programs only for colormapped textures; everything else is fixed function
    Sm2 = 2,
    /// Programs where a feature needs one (fog, glow, warps, brightmaps, colormaps)
    Sm3 = 3,
    /// Programs for all 3D rendering
    Sm4 = 4,
}

impl ShaderModel {
    /// Special-effect programs need at least shader model 3
    pub fn supports_effects(self) -> bool {
        self >= ShaderModel::Sm3
    }
}

impl TryFrom<u8> for ShaderModel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ShaderModel::Sm2),
            3 => Ok(ShaderModel::Sm3),
            4 => Ok(ShaderModel::Sm4),
            _ => Err(format!("invalid shader model {} (must be 2-4)", value)),
        }
    }
}

impl From<ShaderModel> for u8 {
    fn from(model: ShaderModel) -> Self {
        model as u8
    }
}

/// Colormap / translation index
///
/// `0..FIRST_SPECIAL` are desaturation levels (0 = none), followed by the
/// special colormaps (inverse, gold, red, ...) up to the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Colormap(pub i32);

impl Colormap {
    /// No colormap
    pub const DEFAULT: Colormap = Colormap(0);

    /// First special (non-desaturation) colormap
    pub const FIRST_SPECIAL: Colormap = Colormap(32);

    /// One past the last special colormap, given how many there are
    pub fn max_for(special_colormaps: u32) -> Colormap {
        let count = i32::try_from(special_colormaps).unwrap_or(i32::MAX - Self::FIRST_SPECIAL.0);
        Colormap(Self::FIRST_SPECIAL.0.saturating_add(count))
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    pub fn is_special(self) -> bool {
        self >= Self::FIRST_SPECIAL
    }

    /// True if a colormap shader can apply this colormap
    pub fn in_shader_range(self, max: Colormap) -> bool {
        self > Self::DEFAULT && self < max
    }
}

/// Per-material shader requested by the texture being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialShader {
    #[default]
    Default,
    /// Sine-wave warp
    Warp1,
    /// Liquid warp
    Warp2,
    /// Texture with a brightness map
    Brightmap,
}

impl MaterialShader {
    pub fn warp(self) -> Option<WarpKind> {
        match self {
            MaterialShader::Warp1 => Some(WarpKind::Warp1),
            MaterialShader::Warp2 => Some(WarpKind::Warp2),
            MaterialShader::Default | MaterialShader::Brightmap => None,
        }
    }
}

/// Texture warp the caller must perform in software
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarpKind {
    Warp1,
    Warp2,
}

/// Special rendering effect; overrides the ordinary surface modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialEffect {
    #[default]
    None,
    /// Fog boundary between sectors with different fog
    FogBoundary,
    /// Sphere-mapped environment texture
    SphereMap,
}

/// Base program of a surface variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderBase {
    /// Texturing disabled
    Untextured,
    Textured(MaterialShader),
}

/// Identity of a surface program variant.
///
/// Colormap and warp time are uniforms and never part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderKey {
    pub base: ShaderBase,
    pub glow: bool,
    pub lights: bool,
}

impl ShaderKey {
    pub fn textured(material: MaterialShader) -> Self {
        Self {
            base: ShaderBase::Textured(material),
            glow: false,
            lights: false,
        }
    }

    pub fn untextured() -> Self {
        Self {
            base: ShaderBase::Untextured,
            glow: false,
            lights: false,
        }
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    pub fn with_lights(mut self, lights: bool) -> Self {
        self.lights = lights;
        self
    }
}

/// Backend capabilities consulted by shader resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderCaps {
    pub model: ShaderModel,
    /// 0 = off, 1 = standard, 2 = radial
    pub fog_mode: u8,
    pub fog_shader: bool,
    pub colormap_shader: bool,
    pub brightmap_shader: bool,
    pub warp_shader: bool,
    /// One past the last colormap a shader can apply
    pub max_colormap: Colormap,
}

impl Default for ShaderCaps {
    fn default() -> Self {
        crate::config::ShaderConfig::default().caps()
    }
}
