//! Shader variant resolution
//!
//! Maps the logical rendering mode to either a program variant, a
//! special-effect program, or the fixed-function path.

use super::{Colormap, MaterialShader, ShaderBase, ShaderCaps, ShaderKey, ShaderModel, SpecialEffect};

bitflags::bitflags! {
    /// Surface toggles that take part in variant selection
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u8 {
        /// Fog enabled
        const FOG = 0b0000_0001;
        /// Glow enabled
        const GLOW = 0b0000_0010;
        /// Per-vertex dynamic lights enabled
        const LIGHTS = 0b0000_0100;
        /// Drawing 2D (HUD, menus)
        const TWO_D = 0b0000_1000;
    }
}

/// Logical rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A special effect is active; all surface toggles are ignored
    Effect(SpecialEffect),
    /// Ordinary surface
    Surface {
        /// Material when texturing is enabled
        texture: Option<MaterialShader>,
        colormap: Colormap,
        flags: ModeFlags,
    },
}

impl RenderMode {
    /// Build a mode, letting an active effect take precedence
    pub fn new(
        effect: SpecialEffect,
        texture: Option<MaterialShader>,
        colormap: Colormap,
        flags: ModeFlags,
    ) -> Self {
        match effect {
            SpecialEffect::None => RenderMode::Surface {
                texture,
                colormap,
                flags,
            },
            effect => RenderMode::Effect(effect),
        }
    }

    /// Active special effect, `None` for surfaces
    pub fn effect(&self) -> SpecialEffect {
        match self {
            RenderMode::Effect(effect) => *effect,
            RenderMode::Surface { .. } => SpecialEffect::None,
        }
    }
}

/// What the commit has to activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderVariant {
    FixedFunction,
    Effect(SpecialEffect),
    Program(ShaderKey),
}

fn fog_uses_shader(caps: &ShaderCaps) -> bool {
    (caps.fog_mode == 2 || caps.fog_shader) && caps.fog_mode != 0
}

fn surface_needs_shader(
    caps: &ShaderCaps,
    texture: Option<MaterialShader>,
    colormap: Colormap,
    flags: ModeFlags,
) -> bool {
    let material = texture.unwrap_or_default();
    match caps.model {
        ShaderModel::Sm2 => texture.is_some() && !colormap.is_default(),
        ShaderModel::Sm3 => {
            material != MaterialShader::Default
                || (flags.contains(ModeFlags::FOG) && fog_uses_shader(caps))
                || (texture.is_some() && !colormap.is_default())
                || flags.contains(ModeFlags::GLOW)
        }
        ShaderModel::Sm4 => {
            !flags.contains(ModeFlags::TWO_D)
                || material != MaterialShader::Default
                || !colormap.is_default()
        }
    }
}

/// Resolve the variant for a rendering mode.
///
/// Pure: the same caps and mode always give the same variant.
pub fn resolve_variant(caps: &ShaderCaps, mode: &RenderMode) -> ShaderVariant {
    match *mode {
        RenderMode::Effect(effect) if caps.model.supports_effects() => ShaderVariant::Effect(effect),
        RenderMode::Effect(_) => ShaderVariant::FixedFunction,
        RenderMode::Surface {
            texture,
            colormap,
            flags,
        } => {
            if !surface_needs_shader(caps, texture, colormap, flags) {
                return ShaderVariant::FixedFunction;
            }
            let base = match texture {
                Some(material) => ShaderBase::Textured(material),
                None => ShaderBase::Untextured,
            };
            ShaderVariant::Program(ShaderKey {
                base,
                glow: flags.contains(ModeFlags::GLOW),
                lights: flags.contains(ModeFlags::LIGHTS),
            })
        }
    }
}
